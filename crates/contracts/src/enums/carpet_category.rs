use serde::{Deserialize, Serialize};

/// Категория товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CarpetCategory {
    /// Ковёр
    Carpet,
    /// Коврик / придверный мат
    Mat,
}

impl CarpetCategory {
    /// Получить код категории (он же ключ перевода)
    pub fn code(&self) -> &'static str {
        match self {
            CarpetCategory::Carpet => "carpet",
            CarpetCategory::Mat => "mat",
        }
    }

    pub fn all() -> [CarpetCategory; 2] {
        [CarpetCategory::Carpet, CarpetCategory::Mat]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "carpet" => Some(CarpetCategory::Carpet),
            "mat" => Some(CarpetCategory::Mat),
            _ => None,
        }
    }
}
