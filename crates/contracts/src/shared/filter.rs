use crate::domain::a001_carpet::aggregate::Carpet;
use serde::{Deserialize, Serialize};

/// Значение выбора, совпадающее с любым товаром
pub const SELECTION_ALL: &str = "all";

/// Измерение фильтрации витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    Category,
    Scenario,
    Material,
}

impl FilterDimension {
    pub fn code(&self) -> &'static str {
        match self {
            FilterDimension::Category => "category",
            FilterDimension::Scenario => "scenario",
            FilterDimension::Material => "material",
        }
    }

    /// Ключ перевода заголовка фильтра
    pub fn label_key(&self) -> &'static str {
        match self {
            FilterDimension::Category => "filterCategory",
            FilterDimension::Scenario => "filterScenario",
            FilterDimension::Material => "filterMaterial",
        }
    }

    pub fn all() -> [FilterDimension; 3] {
        [
            FilterDimension::Category,
            FilterDimension::Scenario,
            FilterDimension::Material,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "category" => Some(FilterDimension::Category),
            "scenario" => Some(FilterDimension::Scenario),
            "material" => Some(FilterDimension::Material),
            _ => None,
        }
    }
}

/// Выбранное значение одного измерения
///
/// `Tag` не проверяется на принадлежность известному набору:
/// неизвестный тег просто не совпадёт ни с одним товаром.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Tag(String),
}

impl Selection {
    /// `"all"` превращается в `All`, любое другое значение в `Tag`
    pub fn from_value(value: &str) -> Self {
        if value == SELECTION_ALL {
            Selection::All
        } else {
            Selection::Tag(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => SELECTION_ALL,
            Selection::Tag(tag) => tag.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Товар без значения поля совпадает только с `All`
    pub fn matches(&self, tag: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Tag(expected) => tag == Some(expected.as_str()),
        }
    }
}

/// Текущие выборы по всем измерениям
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub category: Selection,
    pub scenario: Selection,
    pub material: Selection,
}

impl FilterSelection {
    pub fn get(&self, dimension: FilterDimension) -> &Selection {
        match dimension {
            FilterDimension::Category => &self.category,
            FilterDimension::Scenario => &self.scenario,
            FilterDimension::Material => &self.material,
        }
    }

    pub fn set(&mut self, dimension: FilterDimension, selection: Selection) {
        match dimension {
            FilterDimension::Category => self.category = selection,
            FilterDimension::Scenario => self.scenario = selection,
            FilterDimension::Material => self.material = selection,
        }
    }

    /// Количество измерений, отличных от `all`
    pub fn active_count(&self) -> usize {
        FilterDimension::all()
            .iter()
            .filter(|d| !self.get(**d).is_all())
            .count()
    }

    /// Конъюнкция по всем трём измерениям
    pub fn matches(&self, carpet: &Carpet) -> bool {
        self.category.matches(carpet.category.map(|c| c.code()))
            && self.scenario.matches(carpet.scenario.map(|s| s.code()))
            && self.material.matches(carpet.material_key.map(|m| m.code()))
    }
}
