//! Лексический анализатор CQL для cqllex

pub mod keywords;
pub mod lexer;
pub mod lexer_methods;
pub mod lexer_readers;
pub mod stream;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use lexer::{next_token_at, Lexer};
pub use stream::{tokenize_recovering, TokenStream};
pub use token::{Channel, Position, Token, TokenType};
