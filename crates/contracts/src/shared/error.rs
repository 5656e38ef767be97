use crate::enums::Language;
use thiserror::Error;

/// Ошибки проверки входных данных каталога и словарей
///
/// Возникают только при построении каталога или таблицы переводов;
/// операции над состоянием витрины ошибок не возвращают.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("carpet id must be positive, got {0}")]
    InvalidId(u32),

    #[error("duplicate carpet id {0}")]
    DuplicateId(u32),

    #[error("carpet {id}: price must be a finite non-negative number, got {price}")]
    InvalidPrice { id: u32, price: f64 },

    #[error("carpet {id}: {field} has a blank {language} translation")]
    BlankTranslation {
        id: u32,
        field: &'static str,
        language: Language,
    },

    #[error("unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("localization table has no entries for language '{0}'")]
    MissingLanguage(Language),

    #[error("label '{key}' is missing for language '{language}'")]
    MissingLabel { key: String, language: Language },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
