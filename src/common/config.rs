//! Конфигурация для cqllex
//!
//! Предоставляет настройки лексического анализатора

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Настройки лексического анализатора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Включать скрытые токены (пробелы, комментарии) в результат `tokenize`
    pub emit_hidden: bool,
    /// Логировать каждый токен на уровне trace
    pub trace_tokens: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            emit_hidden: false,
            trace_tokens: false,
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Разбирает конфигурацию из TOML строки
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = LexerConfig::default();

        if let Ok(value) = std::env::var("CQLLEX_EMIT_HIDDEN") {
            config.emit_hidden = parse_flag("CQLLEX_EMIT_HIDDEN", &value)?;
        }

        if let Ok(value) = std::env::var("CQLLEX_TRACE_TOKENS") {
            config.trace_tokens = parse_flag("CQLLEX_TRACE_TOKENS", &value)?;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(mut self, other: Self) -> Self {
        if other.emit_hidden {
            self.emit_hidden = true;
        }
        if other.trace_tokens {
            self.trace_tokens = true;
        }
        self
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::configuration(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert!(!config.emit_hidden);
        assert!(!config.trace_tokens);
    }

    #[test]
    fn test_config_merge() {
        let config1 = LexerConfig::default();
        let config2 = LexerConfig {
            emit_hidden: true,
            trace_tokens: false,
        };

        let merged = config1.merge(config2);
        assert!(merged.emit_hidden);
        assert!(!merged.trace_tokens);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LexerConfig::from_toml("trace_tokens = true").unwrap();
        assert!(config.trace_tokens);
        assert!(!config.emit_hidden);
    }

    #[test]
    fn test_invalid_toml() {
        let err = LexerConfig::from_toml("emit_hidden = \"maybe\"").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cqllex.toml");
        let config = LexerConfig {
            emit_hidden: true,
            trace_tokens: true,
        };

        config.to_file(&path).unwrap();
        assert_eq!(LexerConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = LexerConfig::from_file("/nonexistent/cqllex.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(parse_flag("X", "1").unwrap());
        assert!(!parse_flag("X", "off").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
