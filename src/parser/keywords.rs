//! Таблица зарезервированных слов CQL
//!
//! Таблица строится один раз на процесс и больше не изменяется.

use crate::parser::token::TokenType;
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> =
        TokenType::KEYWORDS.iter().copied().collect();
}

/// Ищет ключевое слово без учета регистра.
///
/// `word` должен быть целым прогоном символов идентификатора: сравнение
/// идет по всей длине, поэтому `SELECTOR` не совпадает с `SELECT`.
pub fn lookup(word: &str) -> Option<TokenType> {
    if word.len() > MAX_KEYWORD_LEN || !word.is_ascii() {
        return None;
    }
    KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
}

/// Проверяет, является ли слово зарезервированным
pub fn is_reserved(word: &str) -> bool {
    lookup(word).is_some()
}

/// Все зарезервированные слова
pub fn all() -> impl Iterator<Item = (&'static str, TokenType)> {
    TokenType::KEYWORDS.iter().copied()
}

// Длина самого длинного слова (DURABLE_WRITES)
const MAX_KEYWORD_LEN: usize = 14;
