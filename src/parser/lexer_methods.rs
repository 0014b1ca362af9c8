//! Методы курсора лексического анализатора

use crate::parser::lexer::Lexer;
use crate::parser::token::TokenType;

impl Lexer<'_> {
    // === Вспомогательные методы ===

    /// Продвигает позицию на один байт и возвращает его
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let byte = *self.input.as_bytes().get(self.position)?;
        self.position += 1;

        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            // Продолжающие байты UTF-8 не начинают новый символ
            self.column += 1;
        }

        Some(byte)
    }

    /// Продвигает позицию на `count` байт
    pub(crate) fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Возвращает текущий байт без продвижения позиции
    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_ahead(0)
    }

    /// Возвращает байт на определенном расстоянии от текущей позиции
    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.position + offset).copied()
    }

    /// Возвращает символ в текущей позиции
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position..)?.chars().next()
    }

    /// Считает подряд идущие байты, удовлетворяющие `predicate`, начиная с `offset`
    pub(crate) fn count_while(&self, offset: usize, predicate: impl Fn(u8) -> bool) -> usize {
        self.input.as_bytes()[(self.position + offset).min(self.input.len())..]
            .iter()
            .take_while(|&&b| predicate(b))
            .count()
    }

    /// Читает максимальный прогон пробельных символов
    pub(crate) fn read_whitespace(&mut self) -> TokenType {
        let length = self.count_while(0, |b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
        self.advance_n(length);
        TokenType::Space
    }

    /// Читает токен из одного символа
    pub(crate) fn read_single_char_token(&mut self, token_type: TokenType) -> TokenType {
        self.advance();
        token_type
    }

    /// Читает токен из двух символов
    pub(crate) fn read_two_char_token(&mut self, token_type: TokenType) -> TokenType {
        self.advance_n(2);
        token_type
    }

    /// Читает операторы сравнения
    pub(crate) fn read_comparison_operator(&mut self) -> TokenType {
        match (self.peek(), self.peek_ahead(1)) {
            (Some(b'<'), Some(b'=')) => self.read_two_char_token(TokenType::LessEqual),
            (Some(b'>'), Some(b'=')) => self.read_two_char_token(TokenType::GreaterEqual),
            (Some(b'<'), _) => self.read_single_char_token(TokenType::Less),
            _ => self.read_single_char_token(TokenType::Greater),
        }
    }

    /// Читает все, что начинается с `-`.
    ///
    /// Порядок: комментарий (`-- ` или `--` перед концом строки), затем `--`,
    /// затем отрицательное число, затем одиночный минус.
    pub(crate) fn read_minus(&mut self) -> TokenType {
        match self.peek_ahead(1) {
            Some(b'-') => match (self.peek_ahead(2), self.peek_ahead(3)) {
                (Some(b' '), _) | (None, _) | (Some(b'\n'), _) | (Some(b'\r'), Some(b'\n')) => {
                    self.read_line_comment(2)
                }
                _ => self.read_two_char_token(TokenType::MinusMinus),
            },
            Some(b'0'..=b'9') => {
                self.advance();
                self.read_decimal_or_float()
            }
            _ => self.read_single_char_token(TokenType::Minus),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Lexer, TokenType};

    #[test]
    fn test_column_counts_characters_not_bytes() {
        let mut lexer = Lexer::new("'ключ' x");
        lexer.next_token().unwrap();
        assert_eq!(lexer.current_position().column, 7);
        assert_eq!(lexer.offset(), "'ключ'".len());
    }

    #[test]
    fn test_newline_resets_column() {
        let mut lexer = Lexer::new("a\n  b");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[1].position.line, 2);
        assert_eq!(tokens[1].position.column, 3);
    }

    #[test]
    fn test_comparison_operators() {
        let mut lexer = Lexer::new("= < > <= >= <>");
        let types: Vec<_> = lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token_type)
            .collect();
        assert_eq!(
            types,
            vec![
                TokenType::Equal,
                TokenType::Less,
                TokenType::Greater,
                TokenType::LessEqual,
                TokenType::GreaterEqual,
                TokenType::Less,
                TokenType::Greater,
                TokenType::Eof,
            ]
        );
    }
}
