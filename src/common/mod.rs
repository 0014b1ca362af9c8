//! Общие типы и утилиты для cqllex

pub mod config;
pub mod error;

pub use config::LexerConfig;
pub use error::{Error, LiteralKind, Result};
