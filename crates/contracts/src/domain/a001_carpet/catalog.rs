use super::aggregate::{Carpet, CarpetId};
use crate::shared::error::CatalogError;
use std::collections::HashSet;

/// Упорядоченный неизменяемый каталог товаров
///
/// Проверяется один раз при построении; порядок элементов сохраняется.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: Vec<Carpet>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Carpet>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id.value()));
            }
        }
        Ok(Self { items })
    }

    /// Загрузить каталог из JSON-массива товаров
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Carpet> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Carpet] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: CarpetId) -> Option<&Carpet> {
        self.items.iter().find(|item| item.id == id)
    }
}
