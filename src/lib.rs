//! cqllex - лексический анализатор языка запросов CQL
//!
//! Превращает текст CQL запросов в поток классифицированных токенов для парсера:
//! ключевые слова без учета регистра, имена объектов, строковые и числовые
//! литералы, UUID, операторы, а также пробелы и комментарии на скрытом канале.
//!
//! ```
//! use cqllex::{Lexer, TokenType};
//!
//! let mut lexer = Lexer::new("SELECT * FROM users;");
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens[0].token_type, TokenType::Select);
//! assert_eq!(tokens[3].text, "users");
//! ```

pub mod common;
pub mod parser;

pub use common::error::{Error, LiteralKind, Result};
pub use common::config::LexerConfig;
pub use parser::{
    next_token_at, tokenize_recovering, Channel, Lexer, Position, Token, TokenStream, TokenType,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
