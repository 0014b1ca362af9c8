//! Методы чтения специальных токенов для лексического анализатора

use crate::common::{Error, LiteralKind, Result};
use crate::parser::keywords;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Position, TokenType};

/// Длина UUID в канонической записи 8-4-4-4-12
const UUID_LEN: usize = 36;

impl Lexer<'_> {
    /// Читает однострочный комментарий (`-- `, `#`, `//`).
    ///
    /// Комментарий включает завершающий перевод строки; без него тянется до конца ввода.
    pub(crate) fn read_line_comment(&mut self, prefix_len: usize) -> TokenType {
        self.advance_n(prefix_len);

        let length = self.count_while(0, |b| b != b'\n');
        self.advance_n(length);
        if self.peek() == Some(b'\n') {
            self.advance();
        }

        TokenType::LineComment
    }

    /// Читает многострочный комментарий до первого `*/`.
    ///
    /// Незакрытый комментарий поглощает остаток ввода и ошибкой не считается.
    pub(crate) fn read_block_comment(&mut self) -> TokenType {
        // Пропускаем "/*"
        self.advance_n(2);

        while let Some(byte) = self.peek() {
            if byte == b'*' && self.peek_ahead(1) == Some(b'/') {
                self.advance_n(2);
                break;
            }
            self.advance();
        }

        TokenType::BlockComment
    }

    /// Читает строковый литерал.
    ///
    /// Поддерживаются оба вида экранирования: `\x` и удвоенная кавычка `''`.
    pub(crate) fn read_string_literal(&mut self, start: Position) -> Result<TokenType> {
        self.advance(); // '

        loop {
            match self.peek() {
                None => return Err(Error::unterminated(LiteralKind::String, start)),
                Some(b'\\') => {
                    self.advance();
                    if self.advance().is_none() {
                        return Err(Error::unterminated(LiteralKind::String, start));
                    }
                }
                Some(b'\'') => {
                    self.advance();
                    if self.peek() == Some(b'\'') {
                        self.advance();
                    } else {
                        return Ok(TokenType::StringLiteral);
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Читает имя объекта в двойных кавычках; `""` внутри означает кавычку
    pub(crate) fn read_quoted_name(&mut self, start: Position) -> Result<TokenType> {
        self.advance(); // "

        loop {
            match self.peek() {
                None => return Err(Error::unterminated(LiteralKind::QuotedName, start)),
                Some(b'"') => {
                    self.advance();
                    if self.peek() == Some(b'"') {
                        self.advance();
                    } else {
                        return Ok(TokenType::ObjectName);
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Читает блок кода `$$ ... $$` до первого закрывающего `$$`
    pub(crate) fn read_code_block(&mut self, start: Position) -> Result<TokenType> {
        // Пропускаем "$$"
        self.advance_n(2);

        loop {
            match self.peek() {
                None => return Err(Error::unterminated(LiteralKind::CodeBlock, start)),
                Some(b'$') if self.peek_ahead(1) == Some(b'$') => {
                    self.advance_n(2);
                    return Ok(TokenType::CodeBlock);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Читает числовой литерал или UUID, начинающийся с цифры или `.`
    pub(crate) fn read_number(&mut self) -> TokenType {
        if self.is_uuid_ahead() {
            self.advance_n(UUID_LEN);
            return TokenType::UuidLiteral;
        }

        if self.peek() == Some(b'0') && matches!(self.peek_ahead(1), Some(b'x' | b'X')) {
            let digits = self.count_while(2, |b| b.is_ascii_hexdigit());
            if digits > 0 {
                self.advance_n(2 + digits);
                return TokenType::HexadecimalLiteral;
            }
        }

        self.read_decimal_or_float()
    }

    /// Читает целое число, пытаясь сначала расширить его до числа с плавающей точкой
    pub(crate) fn read_decimal_or_float(&mut self) -> TokenType {
        let digits = self.count_while(0, |b| b.is_ascii_digit());
        self.advance_n(digits);

        let mut is_float = false;

        if self.peek() == Some(b'.') {
            let fraction = self.count_while(1, |b| b.is_ascii_digit());
            if digits > 0 || fraction > 0 {
                self.advance_n(1 + fraction);
                is_float = true;
            }
        }

        if digits > 0 || is_float {
            if let Some(length) = self.exponent_len() {
                self.advance_n(length);
                is_float = true;
            }
        }

        if is_float {
            TokenType::FloatLiteral
        } else {
            TokenType::DecimalLiteral
        }
    }

    /// Читает слово: UUID, шестнадцатеричный литерал `x'..'`, ключевое слово или имя
    pub(crate) fn read_word(&mut self) -> TokenType {
        if self.is_uuid_ahead() {
            self.advance_n(UUID_LEN);
            return TokenType::UuidLiteral;
        }

        if let Some(length) = self.quoted_hex_len() {
            self.advance_n(length);
            return TokenType::HexadecimalLiteral;
        }

        self.read_identifier_or_keyword()
    }

    /// Читает идентификатор или ключевое слово.
    ///
    /// Сначала берется самый длинный прогон символов идентификатора, потом
    /// он целиком ищется в таблице ключевых слов.
    pub(crate) fn read_identifier_or_keyword(&mut self) -> TokenType {
        let length = self.count_while(0, |b| b.is_ascii_alphanumeric() || b == b'_');
        let word = &self.input[self.position..self.position + length];
        let token_type = keywords::lookup(word).unwrap_or(TokenType::ObjectName);

        self.advance_n(length);
        token_type
    }

    /// Длина показателя степени (`e`, знак, цифры) в текущей позиции
    fn exponent_len(&self) -> Option<usize> {
        if !matches!(self.peek(), Some(b'e' | b'E')) {
            return None;
        }

        let sign = usize::from(matches!(self.peek_ahead(1), Some(b'+' | b'-')));
        let digits = self.count_while(1 + sign, |b| b.is_ascii_digit());
        (digits > 0).then_some(1 + sign + digits)
    }

    /// Длина литерала `x'..'` с четным ненулевым числом шестнадцатеричных цифр
    fn quoted_hex_len(&self) -> Option<usize> {
        if !matches!(self.peek(), Some(b'x' | b'X')) || self.peek_ahead(1) != Some(b'\'') {
            return None;
        }

        let digits = self.count_while(2, |b| b.is_ascii_hexdigit());
        let closed = self.peek_ahead(2 + digits) == Some(b'\'');
        (closed && digits > 0 && digits % 2 == 0).then_some(3 + digits)
    }

    /// Проверяет, что с текущей позиции начинается UUID вида 8-4-4-4-12
    fn is_uuid_ahead(&self) -> bool {
        let rest = &self.input.as_bytes()[self.position..];
        if rest.len() < UUID_LEN {
            return false;
        }

        rest[..UUID_LEN].iter().enumerate().all(|(i, &b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
    }
}
