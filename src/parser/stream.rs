//! Буферизованный поток токенов
//!
//! `TokenStream` хранит все токены одного входа (включая скрытые) и дает парсеру
//! просмотр вперед по значимым токенам, а инструментам вроде форматтера доступ к
//! пробелам и комментариям вокруг любого токена.

use crate::common::{Error, Result};
use crate::parser::lexer::Lexer;
use crate::parser::token::Token;

/// Поток токенов с курсором по значимым токенам
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// Все токены, включая скрытые и завершающий `Eof`
    tokens: Vec<Token>,
    /// Индекс текущего значимого токена в `tokens`
    cursor: usize,
}

impl TokenStream {
    /// Разбивает вход на токены; первая лексическая ошибка прерывает разбор
    pub fn new(input: &str) -> Result<Self> {
        let tokens = Lexer::new(input).tokenize_all()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Создает поток из готовой последовательности токенов
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut stream = Self { tokens, cursor: 0 };
        stream.cursor = stream.next_significant_from(0);
        stream
    }

    /// Все токены, включая скрытые
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Токен по его номеру в потоке
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Только значимые токены
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_hidden())
    }

    /// Значимый токен на `k` позиций вперед (`k = 1` — текущий)
    pub fn lt(&self, k: usize) -> Option<&Token> {
        if k == 0 {
            return None;
        }
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .filter(|token| !token.is_hidden())
            .nth(k - 1)
    }

    /// Возвращает текущий значимый токен и переходит к следующему.
    ///
    /// На `Eof` курсор больше не двигается.
    pub fn consume(&mut self) -> Option<&Token> {
        let current = self.cursor;
        let token = self.tokens.get(current)?;
        if !token.is_eof() {
            self.cursor = self.next_significant_from(current + 1);
        }
        self.tokens.get(current)
    }

    /// Скрытые токены непосредственно перед токеном `index`
    pub fn hidden_to_left(&self, index: usize) -> &[Token] {
        let end = index.min(self.tokens.len());
        let start = self.tokens[..end]
            .iter()
            .rposition(|token| !token.is_hidden())
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.tokens[start..end]
    }

    /// Скрытые токены непосредственно после токена `index`
    pub fn hidden_to_right(&self, index: usize) -> &[Token] {
        let start = index.saturating_add(1).min(self.tokens.len());
        let end = self.next_significant_from(start);
        &self.tokens[start..end]
    }

    /// Восстанавливает исходный текст из всех токенов
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Сериализует поток в JSON для внешних инструментов
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.tokens)?)
    }

    fn next_significant_from(&self, from: usize) -> usize {
        self.tokens[from.min(self.tokens.len())..]
            .iter()
            .position(|token| !token.is_hidden())
            .map(|i| from + i)
            .unwrap_or(self.tokens.len())
    }
}

/// Разбивает вход на токены, пропуская по одному символу после каждой ошибки.
///
/// Возвращает все токены (включая скрытые и `Eof`) и собранные ошибки.
pub fn tokenize_recovering(input: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let is_eof = token.is_eof();
                tokens.push(token);
                if is_eof {
                    break;
                }
            }
            Err(err) => {
                errors.push(err);
                if lexer.skip_char().is_none() {
                    break;
                }
            }
        }
    }

    (tokens, errors)
}
