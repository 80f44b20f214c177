// ==========================================
// Import layer error types
// ==========================================
// Fatal conditions only. Row-level problems are RowIssues and
// never abort an import.
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("formato de arquivo não suportado: {0} (apenas .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("falha ao ler arquivo: {0}")]
    FileReadError(String),

    #[error("falha ao interpretar Excel: {0}")]
    ExcelParseError(String),

    #[error("falha ao interpretar CSV: {0}")]
    CsvParseError(String),

    #[error("aba '{sheet}' não encontrada (abas disponíveis: {available})")]
    SheetNotFound { sheet: String, available: String },

    // ===== content errors =====
    #[error("relatório sem linhas de dados: {0}")]
    EmptyReport(String),

    // ===== configuration =====
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    // ===== catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
