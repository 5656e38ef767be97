use serde::{Deserialize, Serialize};

/// Материал изделия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKind {
    Cotton,
    Wool,
    Jute,
    Blended,
    Linen,
}

impl MaterialKind {
    /// Получить код материала (он же ключ перевода)
    pub fn code(&self) -> &'static str {
        match self {
            MaterialKind::Cotton => "cotton",
            MaterialKind::Wool => "wool",
            MaterialKind::Jute => "jute",
            MaterialKind::Blended => "blended",
            MaterialKind::Linen => "linen",
        }
    }

    pub fn all() -> [MaterialKind; 5] {
        [
            MaterialKind::Cotton,
            MaterialKind::Wool,
            MaterialKind::Jute,
            MaterialKind::Blended,
            MaterialKind::Linen,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cotton" => Some(MaterialKind::Cotton),
            "wool" => Some(MaterialKind::Wool),
            "jute" => Some(MaterialKind::Jute),
            "blended" => Some(MaterialKind::Blended),
            "linen" => Some(MaterialKind::Linen),
            _ => None,
        }
    }
}
