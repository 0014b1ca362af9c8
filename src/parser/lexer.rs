//! Лексический анализатор CQL
//!
//! Преобразует входной CQL текст в последовательность токенов для дальнейшего парсинга.
//! На каждой позиции выбирается самое длинное совпадение среди всех правил; при
//! равной длине побеждает правило, объявленное раньше (ключевые слова раньше
//! имен объектов, комментарии раньше `--` и `-`).
//!
//! Токены покрывают вход без пропусков: склейка `text` всех токенов, включая
//! скрытые, дает исходную строку.

use crate::common::{Error, LexerConfig, Result};
use crate::parser::token::{Position, Token, TokenType};

/// Лексический анализатор CQL
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Исходный текст
    pub(super) input: &'a str,
    /// Текущее байтовое смещение
    pub(super) position: usize,
    /// Строка текущей позиции (с 1)
    pub(super) line: usize,
    /// Колонка текущей позиции в символах (с 1)
    pub(super) column: usize,
    /// Номер следующего токена
    token_index: usize,
    /// Итератор уже вернул EOF или ошибку
    exhausted: bool,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Создает новый лексический анализатор
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    /// Создает лексический анализатор с заданными настройками
    pub fn with_config(input: &'a str, config: LexerConfig) -> Self {
        let start = Position::start();
        Self {
            input,
            position: start.offset,
            line: start.line,
            column: start.column,
            token_index: 0,
            exhausted: false,
            config,
        }
    }

    /// Создает лексический анализатор, начинающий с байтового смещения `offset`
    pub fn at(input: &'a str, offset: usize) -> Result<Self> {
        if offset > input.len() || !input.is_char_boundary(offset) {
            return Err(Error::InvalidOffset {
                offset,
                length: input.len(),
            });
        }

        let mut lexer = Self::new(input);
        let prefix = &input[..offset];
        lexer.position = offset;
        lexer.line = 1 + prefix.matches('\n').count();
        let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        lexer.column = 1 + prefix[line_start..].chars().count();
        Ok(lexer)
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Текущая позиция курсора
    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column, self.position)
    }

    /// Текущее байтовое смещение курсора
    pub fn offset(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Возвращает следующий токен любого канала.
    ///
    /// В конце ввода каждый вызов возвращает токен `Eof` нулевой длины.
    pub fn next_token(&mut self) -> Result<Token> {
        let start = self.current_position();

        if self.is_at_end() {
            return Ok(Token::new(TokenType::Eof, String::new(), start, self.token_index));
        }

        let token_type = match self.scan_token(start) {
            Ok(token_type) => token_type,
            Err(err) => {
                // Курсор остается на начале неудачного токена
                self.position = start.offset;
                self.line = start.line;
                self.column = start.column;
                log::debug!("lexical error: {}", err);
                return Err(err);
            }
        };

        let text = self.input[start.offset..self.position].to_string();
        let token = Token::new(token_type, text, start, self.token_index);
        self.token_index += 1;

        if self.config.trace_tokens {
            log::trace!("{}", token);
        }

        Ok(token)
    }

    /// Возвращает следующий токен канала по умолчанию, пропуская скрытые
    pub fn next_significant_token(&mut self) -> Result<Token> {
        loop {
            let token = self.next_token()?;
            if !token.is_hidden() {
                return Ok(token);
            }
        }
    }

    /// Возвращает следующий токен без его потребления (lookahead)
    pub fn peek_token(&self) -> Result<Token> {
        let mut probe = self.clone();
        probe.config.trace_tokens = false;
        probe.next_token()
    }

    /// Возвращает все значимые токены и завершающий `Eof`.
    ///
    /// Скрытые токены попадают в результат, если включен `emit_hidden`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let emit_hidden = self.config.emit_hidden;
        self.collect_tokens(emit_hidden)
    }

    /// Возвращает все токены, включая скрытые, и завершающий `Eof`
    pub fn tokenize_all(&mut self) -> Result<Vec<Token>> {
        self.collect_tokens(true)
    }

    /// Пропускает один символ после ошибки; политику восстановления выбирает вызывающий
    pub fn skip_char(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        for _ in 0..ch.len_utf8() {
            self.advance();
        }
        self.exhausted = false;
        log::debug!("skipped {:?} at {}:{}", ch, self.line, self.column);
        Some(ch)
    }

    fn collect_tokens(&mut self, emit_hidden: bool) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();

            if emit_hidden || !token.is_hidden() {
                tokens.push(token);
            }

            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Выбирает правило по первому символу и сдвигает курсор за конец токена
    fn scan_token(&mut self, start: Position) -> Result<TokenType> {
        let byte = self.input.as_bytes()[self.position];

        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => Ok(self.read_whitespace()),

            // Комментарии, `--` и отрицательные числа
            b'-' => Ok(self.read_minus()),
            b'#' => Ok(self.read_line_comment(1)),
            b'/' => Ok(match self.peek_ahead(1) {
                Some(b'/') => self.read_line_comment(2),
                Some(b'*') => self.read_block_comment(),
                _ => self.read_single_char_token(TokenType::Divide),
            }),

            // Литералы в кавычках
            b'\'' => self.read_string_literal(start),
            b'"' => self.read_quoted_name(start),
            b'$' if self.peek_ahead(1) == Some(b'$') => self.read_code_block(start),

            // Числа, UUID, имена и ключевые слова
            b'0'..=b'9' => Ok(self.read_number()),
            b'.' if self.peek_ahead(1).is_some_and(|b| b.is_ascii_digit()) => {
                Ok(self.read_number())
            }
            b'a'..=b'z' | b'A'..=b'Z' => Ok(self.read_word()),

            // Операторы сравнения
            b'=' => Ok(self.read_single_char_token(TokenType::Equal)),
            b'<' | b'>' => Ok(self.read_comparison_operator()),

            // Разделители и операторы из одного символа
            b'(' => Ok(self.read_single_char_token(TokenType::LeftParen)),
            b')' => Ok(self.read_single_char_token(TokenType::RightParen)),
            b'{' => Ok(self.read_single_char_token(TokenType::LeftBrace)),
            b'}' => Ok(self.read_single_char_token(TokenType::RightBrace)),
            b'[' => Ok(self.read_single_char_token(TokenType::LeftBracket)),
            b']' => Ok(self.read_single_char_token(TokenType::RightBracket)),
            b',' => Ok(self.read_single_char_token(TokenType::Comma)),
            b';' => Ok(self.read_single_char_token(TokenType::Semicolon)),
            b':' => Ok(self.read_single_char_token(TokenType::Colon)),
            b'.' => Ok(self.read_single_char_token(TokenType::Dot)),
            b'*' => Ok(self.read_single_char_token(TokenType::Star)),
            b'%' => Ok(self.read_single_char_token(TokenType::Modulo)),
            b'+' => Ok(self.read_single_char_token(TokenType::Plus)),

            _ => {
                let character = self.current_char().unwrap_or('\u{FFFD}');
                Err(Error::unrecognized(character, start))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    /// Выдает все токены, включая скрытые; `Eof` не выдается.
    /// После первой ошибки итерация заканчивается.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

/// Сканирует один токен, начиная с байтового смещения `offset`.
///
/// Возвращает токен и смещение сразу за ним. На конце ввода возвращает `Eof`
/// и то же смещение.
pub fn next_token_at(input: &str, offset: usize) -> Result<(Token, usize)> {
    let mut lexer = Lexer::at(input, offset)?;
    let token = lexer.next_token()?;
    Ok((token, lexer.offset()))
}
