//! Обработка ошибок для cqllex

use crate::parser::token::Position;
use std::fmt;
use thiserror::Error;

/// Вид литерала, у которого не нашлось закрывающего разделителя
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Строка в одинарных кавычках
    String,
    /// Имя объекта в двойных кавычках
    QuotedName,
    /// Блок кода `$$ ... $$`
    CodeBlock,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralKind::String => "string literal",
            LiteralKind::QuotedName => "quoted object name",
            LiteralKind::CodeBlock => "code block",
        };
        write!(f, "{}", name)
    }
}

/// Основной тип ошибки для cqllex
#[derive(Error, Debug)]
pub enum Error {
    /// Литерал без закрывающего разделителя до конца ввода
    #[error("Unterminated {literal} starting at {position}")]
    UnterminatedLiteral {
        literal: LiteralKind,
        position: Position,
    },

    /// Символ, с которого не начинается ни одно лексическое правило
    #[error("Unrecognized character {character:?} at {position}")]
    UnrecognizedCharacter { character: char, position: Position },

    /// Смещение за пределами входа или не на границе символа
    #[error("Invalid offset {offset} for input of {length} bytes")]
    InvalidOffset { offset: usize, length: usize },

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для cqllex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку незакрытого литерала
    pub fn unterminated(literal: LiteralKind, position: Position) -> Self {
        Self::UnterminatedLiteral { literal, position }
    }

    /// Создает ошибку нераспознанного символа
    pub fn unrecognized(character: char, position: Position) -> Self {
        Self::UnrecognizedCharacter {
            character,
            position,
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Является ли ошибка лексической (а не ошибкой окружения)
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedLiteral { .. } | Error::UnrecognizedCharacter { .. }
        )
    }

    /// Позиция лексической ошибки во входном тексте
    pub fn position(&self) -> Option<&Position> {
        match self {
            Error::UnterminatedLiteral { position, .. }
            | Error::UnrecognizedCharacter { position, .. } => Some(position),
            _ => None,
        }
    }

    /// Байтовое смещение лексической ошибки
    pub fn offset(&self) -> Option<usize> {
        self.position().map(|position| position.offset)
    }
}
