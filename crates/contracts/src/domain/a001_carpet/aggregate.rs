use crate::enums::{CarpetCategory, Language, MaterialKind, RoomScenario};
use crate::shared::error::CatalogError;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор ковра в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarpetId(pub u32);

impl CarpetId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CarpetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Localized text
// ============================================================================

/// Текст на всех поддерживаемых языках
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Zh => &self.zh,
            Language::En => &self.en,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Ковёр (товар витрины)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carpet {
    pub id: CarpetId,

    /// Название товара
    pub name: LocalizedText,

    /// Подпись материала для карточки
    pub material: LocalizedText,

    /// Цена (неотрицательная)
    pub price: f64,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    #[serde(default)]
    pub category: Option<CarpetCategory>,

    #[serde(default)]
    pub scenario: Option<RoomScenario>,

    #[serde(rename = "materialKey", default)]
    pub material_key: Option<MaterialKind>,
}

impl Carpet {
    /// Создать ковёр без тегов фильтрации
    pub fn new(
        id: CarpetId,
        name: LocalizedText,
        material: LocalizedText,
        price: f64,
        image_url: String,
    ) -> Self {
        Self {
            id,
            name,
            material,
            price,
            image_url,
            category: None,
            scenario: None,
            material_key: None,
        }
    }

    pub fn with_category(mut self, category: CarpetCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_scenario(mut self, scenario: RoomScenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_material_key(mut self, material_key: MaterialKind) -> Self {
        self.material_key = Some(material_key);
        self
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.value() == 0 {
            return Err(CatalogError::InvalidId(self.id.value()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                id: self.id.value(),
                price: self.price,
            });
        }

        for (field, text) in [("name", &self.name), ("material", &self.material)] {
            for language in Language::all() {
                if text.get(language).trim().is_empty() {
                    return Err(CatalogError::BlankTranslation {
                        id: self.id.value(),
                        field,
                        language,
                    });
                }
            }
        }

        Ok(())
    }
}
