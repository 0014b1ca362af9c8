//! Токены для CQL лексера
//!
//! Определяет все типы токенов, которые может распознать лексический анализатор,
//! включая ключевые слова CQL, имена объектов, литералы, операторы и комментарии.
//! Словарь совпадает со словарем исходной грамматики: у каждого типа есть
//! символическое имя (`K_SELECT`, `OBJECT_NAME`, ...).

use serde::Serialize;
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Канал токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    /// Значимые токены, которые видит парсер
    Default,
    /// Пробелы и комментарии
    Hidden,
}

/// Токен с позицией и исходным текстом
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    /// Точный фрагмент входа (регистр сохранен)
    pub text: String,
    pub channel: Channel,
    /// Позиция начала токена
    pub position: Position,
    /// Байтовое смещение начала
    pub start: usize,
    /// Байтовое смещение конца (не включая)
    pub end: usize,
    /// Порядковый номер токена в потоке, включая скрытые
    pub index: usize,
}

impl Token {
    pub fn new(token_type: TokenType, text: String, position: Position, index: usize) -> Self {
        let start = position.offset;
        let end = start + text.len();
        Self {
            token_type,
            text,
            channel: token_type.channel(),
            position,
            start,
            end,
            index,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}('{}') at {}",
            self.token_type.symbolic_name(),
            self.text.escape_debug(),
            self.position
        )
    }
}

/// Строит перечисление `TokenType` и таблицы имен из одного списка.
///
/// `fixed` — токены с неизменным текстом, `keywords` — зарезервированные
/// слова (символическое имя `K_` + слово), `other` — классы токенов с
/// переменным текстом.
macro_rules! token_types {
    (
        fixed { $($fixed:ident => $fixed_sym:literal, $fixed_text:literal;)* }
        keywords { $($kw:ident => $kw_text:literal;)* }
        other { $($other:ident => $other_sym:literal;)* }
    ) => {
        /// Типы токенов CQL
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum TokenType {
            $($fixed,)*
            $($kw,)*
            $($other,)*
        }

        impl TokenType {
            /// Все зарезервированные слова в порядке объявления
            pub const KEYWORDS: &'static [(&'static str, TokenType)] = &[
                $(($kw_text, TokenType::$kw),)*
            ];

            /// Символическое имя типа токена
            pub fn symbolic_name(&self) -> &'static str {
                match self {
                    $(TokenType::$fixed => $fixed_sym,)*
                    $(TokenType::$kw => concat!("K_", $kw_text),)*
                    $(TokenType::$other => $other_sym,)*
                }
            }

            /// Фиксированное написание токена в кавычках, если оно есть
            pub fn literal_name(&self) -> Option<&'static str> {
                match self {
                    $(TokenType::$fixed => Some(concat!("'", $fixed_text, "'")),)*
                    _ => None,
                }
            }

            /// Фиксированный текст токена без кавычек
            pub fn fixed_text(&self) -> Option<&'static str> {
                match self {
                    $(TokenType::$fixed => Some($fixed_text),)*
                    $(TokenType::$kw => Some($kw_text),)*
                    _ => None,
                }
            }

            /// Проверяет, является ли токен ключевым словом
            pub fn is_keyword(&self) -> bool {
                matches!(*self, $(TokenType::$kw)|*)
            }
        }
    };
}

token_types! {
    fixed {
        LeftParen => "LR_BRACKET", "(";
        RightParen => "RR_BRACKET", ")";
        LeftBrace => "LC_BRACKET", "{";
        RightBrace => "RC_BRACKET", "}";
        LeftBracket => "LS_BRACKET", "[";
        RightBracket => "RS_BRACKET", "]";
        Comma => "COMMA", ",";
        Semicolon => "SEMI", ";";
        Colon => "COLON", ":";
        DoubleQuote => "DQUOTE", "\"";
        SingleQuote => "SQUOTE", "'";
        Dot => "DOT", ".";
        Star => "STAR", "*";
        Divide => "DIVIDE", "/";
        Modulo => "MODULE", "%";
        Plus => "PLUS", "+";
        MinusMinus => "MINUSMINUS", "--";
        Minus => "MINUS", "-";
        Equal => "OPERATOR_EQ", "=";
        Less => "OPERATOR_LT", "<";
        Greater => "OPERATOR_GT", ">";
        LessEqual => "OPERATOR_LTE", "<=";
        GreaterEqual => "OPERATOR_GTE", ">=";
    }
    keywords {
        Add => "ADD";
        Aggregate => "AGGREGATE";
        All => "ALL";
        Allow => "ALLOW";
        Alter => "ALTER";
        And => "AND";
        Any => "ANY";
        Apply => "APPLY";
        As => "AS";
        Asc => "ASC";
        Authorize => "AUTHORIZE";
        Batch => "BATCH";
        Begin => "BEGIN";
        By => "BY";
        Called => "CALLED";
        Clustering => "CLUSTERING";
        ColumnFamily => "COLUMNFAMILY";
        Compact => "COMPACT";
        Consistency => "CONSISTENCY";
        Contains => "CONTAINS";
        Create => "CREATE";
        Custom => "CUSTOM";
        Delete => "DELETE";
        Desc => "DESC";
        Describe => "DESCRIBE";
        Distinct => "DISTINCT";
        Drop => "DROP";
        DurableWrites => "DURABLE_WRITES";
        EachQuorum => "EACH_QUORUM";
        Entries => "ENTRIES";
        Execute => "EXECUTE";
        Exists => "EXISTS";
        False => "FALSE";
        Filtering => "FILTERING";
        FinalFunc => "FINALFUNC";
        From => "FROM";
        Full => "FULL";
        Function => "FUNCTION";
        Functions => "FUNCTIONS";
        Grant => "GRANT";
        If => "IF";
        In => "IN";
        Index => "INDEX";
        Infinity => "INFINITY";
        InitCond => "INITCOND";
        Input => "INPUT";
        Insert => "INSERT";
        Into => "INTO";
        Is => "IS";
        Key => "KEY";
        Keys => "KEYS";
        Keyspace => "KEYSPACE";
        Keyspaces => "KEYSPACES";
        Language => "LANGUAGE";
        Level => "LEVEL";
        Limit => "LIMIT";
        LocalOne => "LOCAL_ONE";
        LocalQuorum => "LOCAL_QUORUM";
        Logged => "LOGGED";
        Login => "LOGIN";
        Materialized => "MATERIALIZED";
        Modify => "MODIFY";
        NaN => "NAN";
        NoRecursive => "NORECURSIVE";
        NoSuperuser => "NOSUPERUSER";
        Not => "NOT";
        Null => "NULL";
        Of => "OF";
        On => "ON";
        One => "ONE";
        Options => "OPTIONS";
        Or => "OR";
        Order => "ORDER";
        Partition => "PARTITION";
        Password => "PASSWORD";
        Per => "PER";
        Permission => "PERMISSION";
        Permissions => "PERMISSIONS";
        Primary => "PRIMARY";
        Quorum => "QUORUM";
        Rename => "RENAME";
        Replace => "REPLACE";
        Replication => "REPLICATION";
        Returns => "RETURNS";
        Revoke => "REVOKE";
        Role => "ROLE";
        Roles => "ROLES";
        Schema => "SCHEMA";
        Select => "SELECT";
        Set => "SET";
        SFunc => "SFUNC";
        Static => "STATIC";
        Storage => "STORAGE";
        SType => "STYPE";
        Superuser => "SUPERUSER";
        Table => "TABLE";
        Three => "THREE";
        Timestamp => "TIMESTAMP";
        To => "TO";
        Token => "TOKEN";
        Trigger => "TRIGGER";
        True => "TRUE";
        Truncate => "TRUNCATE";
        Ttl => "TTL";
        Two => "TWO";
        Type => "TYPE";
        Unlogged => "UNLOGGED";
        Update => "UPDATE";
        Use => "USE";
        User => "USER";
        Using => "USING";
        Uuid => "UUID";
        Values => "VALUES";
        View => "VIEW";
        Where => "WHERE";
        With => "WITH";
        WriteTime => "WRITETIME";
        Ascii => "ASCII";
        BigInt => "BIGINT";
        Blob => "BLOB";
        Boolean => "BOOLEAN";
        Counter => "COUNTER";
        Date => "DATE";
        Decimal => "DECIMAL";
        Double => "DOUBLE";
        Float => "FLOAT";
        Frozen => "FROZEN";
        Inet => "INET";
        Int => "INT";
        List => "LIST";
        Map => "MAP";
        SmallInt => "SMALLINT";
        Text => "TEXT";
        TimeUuid => "TIMEUUID";
        Time => "TIME";
        TinyInt => "TINYINT";
        Tuple => "TUPLE";
        Varchar => "VARCHAR";
        VarInt => "VARINT";
        Users => "USERS";
    }
    other {
        Space => "SPACE";
        SpecMysqlComment => "SPEC_MYSQL_COMMENT";
        LineComment => "LINE_COMMENT";
        BlockComment => "COMMENT_INPUT";
        CodeBlock => "CODE_BLOCK";
        StringLiteral => "STRING_LITERAL";
        DecimalLiteral => "DECIMAL_LITERAL";
        FloatLiteral => "FLOAT_LITERAL";
        HexadecimalLiteral => "HEXADECIMAL_LITERAL";
        RealLiteral => "REAL_LITERAL";
        ObjectName => "OBJECT_NAME";
        UuidLiteral => "UUID";
        Eof => "EOF";
    }
}

impl TokenType {
    /// Канал, на который попадает токен этого типа
    pub fn channel(&self) -> Channel {
        if self.is_hidden() {
            Channel::Hidden
        } else {
            Channel::Default
        }
    }

    /// Пробелы и комментарии
    pub fn is_hidden(&self) -> bool {
        matches!(
            self,
            TokenType::Space
                | TokenType::SpecMysqlComment
                | TokenType::BlockComment
                | TokenType::LineComment
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::CodeBlock
                | TokenType::StringLiteral
                | TokenType::DecimalLiteral
                | TokenType::FloatLiteral
                | TokenType::HexadecimalLiteral
                | TokenType::RealLiteral
                | TokenType::UuidLiteral
        )
    }

    /// Проверяет, является ли токен оператором
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Dot
                | TokenType::Star
                | TokenType::Divide
                | TokenType::Modulo
                | TokenType::Plus
                | TokenType::MinusMinus
                | TokenType::Minus
                | TokenType::Equal
                | TokenType::Less
                | TokenType::Greater
                | TokenType::LessEqual
                | TokenType::GreaterEqual
        )
    }

    /// Проверяет, является ли токен разделителем
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenType::LeftParen
                | TokenType::RightParen
                | TokenType::LeftBrace
                | TokenType::RightBrace
                | TokenType::LeftBracket
                | TokenType::RightBracket
                | TokenType::Comma
                | TokenType::Semicolon
                | TokenType::Colon
                | TokenType::DoubleQuote
                | TokenType::SingleQuote
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_text() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", self.symbolic_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_size() {
        assert_eq!(TokenType::KEYWORDS.len(), 140);
        assert!(TokenType::KEYWORDS.iter().all(|(_, t)| t.is_keyword()));
    }

    #[test]
    fn test_symbolic_names() {
        assert_eq!(TokenType::Select.symbolic_name(), "K_SELECT");
        assert_eq!(TokenType::DurableWrites.symbolic_name(), "K_DURABLE_WRITES");
        assert_eq!(TokenType::LeftParen.symbolic_name(), "LR_BRACKET");
        assert_eq!(TokenType::UuidLiteral.symbolic_name(), "UUID");
        assert_eq!(TokenType::Uuid.symbolic_name(), "K_UUID");
    }

    #[test]
    fn test_literal_names() {
        assert_eq!(TokenType::MinusMinus.literal_name(), Some("'--'"));
        assert_eq!(TokenType::SingleQuote.literal_name(), Some("'''"));
        assert_eq!(TokenType::Select.literal_name(), None);
        assert_eq!(TokenType::ObjectName.literal_name(), None);
    }

    #[test]
    fn test_channels() {
        assert_eq!(TokenType::Space.channel(), Channel::Hidden);
        assert_eq!(TokenType::BlockComment.channel(), Channel::Hidden);
        assert_eq!(TokenType::Minus.channel(), Channel::Default);
        assert_eq!(TokenType::Eof.channel(), Channel::Default);
    }

    #[test]
    fn test_mysql_comment_type() {
        assert_eq!(
            TokenType::SpecMysqlComment.symbolic_name(),
            "SPEC_MYSQL_COMMENT"
        );
        assert_eq!(TokenType::SpecMysqlComment.channel(), Channel::Hidden);
        assert_eq!(TokenType::SpecMysqlComment.literal_name(), None);
    }

    #[test]
    fn test_classification() {
        assert!(TokenType::NaN.is_keyword());
        assert!(TokenType::Star.is_operator());
        assert!(TokenType::Comma.is_punctuation());
        assert!(TokenType::HexadecimalLiteral.is_literal());
        assert!(!TokenType::ObjectName.is_keyword());
    }

    #[test]
    fn test_token_offsets() {
        let token = Token::new(
            TokenType::ObjectName,
            "users".to_string(),
            Position::new(1, 15, 14),
            3,
        );
        assert_eq!(token.start, 14);
        assert_eq!(token.end, 19);
        assert_eq!(token.channel, Channel::Default);
        assert_eq!(token.to_string(), "OBJECT_NAME('users') at 1:15");
    }
}
