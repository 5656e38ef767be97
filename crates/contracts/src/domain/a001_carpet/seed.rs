//! Детерминированный генератор демонстрационного каталога

use super::aggregate::{Carpet, CarpetId, LocalizedText};
use super::catalog::ItemCatalog;
use crate::enums::{CarpetCategory, MaterialKind, RoomScenario};
use crate::shared::error::CatalogError;

/// Размер демонстрационного каталога
pub const MOCK_CATALOG_SIZE: usize = 60;

const BASE_PRICE: f64 = 199.0;
const PRICE_STEP: f64 = 15.0;

struct MaterialSeed {
    zh: &'static str,
    en: &'static str,
    kind: MaterialKind,
}

struct NameSeed {
    zh: &'static str,
    en: &'static str,
    category: CarpetCategory,
}

const MATERIALS: [MaterialSeed; 5] = [
    MaterialSeed { zh: "纯棉", en: "Pure Cotton", kind: MaterialKind::Cotton },
    MaterialSeed { zh: "羊毛", en: "Wool", kind: MaterialKind::Wool },
    MaterialSeed { zh: "黄麻", en: "Jute", kind: MaterialKind::Jute },
    MaterialSeed { zh: "混纺", en: "Blended Fiber", kind: MaterialKind::Blended },
    MaterialSeed { zh: "亚麻", en: "Linen", kind: MaterialKind::Linen },
];

const NAMES: [NameSeed; 6] = [
    NameSeed { zh: "北欧简约长毛地毯", en: "Nordic Minimalist Shaggy Rug", category: CarpetCategory::Carpet },
    NameSeed { zh: "日式和风编织毯", en: "Japanese Woven Tatami Mat", category: CarpetCategory::Mat },
    NameSeed { zh: "复古几何艺术毯", en: "Vintage Geometric Art Rug", category: CarpetCategory::Carpet },
    NameSeed { zh: "云感静音卧室毯", en: "Cloud-feel Silent Bedroom Rug", category: CarpetCategory::Carpet },
    NameSeed { zh: "天然黄麻耐磨地垫", en: "Natural Jute Durable Mat", category: CarpetCategory::Mat },
    NameSeed { zh: "手工羊毛奢华地毯", en: "Handmade Wool Luxury Rug", category: CarpetCategory::Carpet },
];

const SCENARIOS: [RoomScenario; 3] = [
    RoomScenario::LivingRoom,
    RoomScenario::Bedroom,
    RoomScenario::Entryway,
];

/// Сгенерировать `count` товаров
///
/// Товар `i` (с нуля) получает id `i + 1`, название по кругу из шести,
/// материал по кругу из пяти, сценарий по кругу из трёх и цену `199 + 15 * i`.
pub fn generate_mock_carpets(count: usize) -> Vec<Carpet> {
    (0..count)
        .map(|i| {
            let name = &NAMES[i % NAMES.len()];
            let material = &MATERIALS[i % MATERIALS.len()];
            let series = i / NAMES.len() + 1;

            Carpet::new(
                CarpetId::new(i as u32 + 1),
                LocalizedText::new(
                    format!("{} {}号", name.zh, series),
                    format!("{} No.{}", name.en, series),
                ),
                LocalizedText::new(material.zh, material.en),
                BASE_PRICE + PRICE_STEP * i as f64,
                format!("https://picsum.photos/seed/{}/300/200", i + 123),
            )
            .with_category(name.category)
            .with_scenario(SCENARIOS[i % SCENARIOS.len()])
            .with_material_key(material.kind)
        })
        .collect()
}

/// Демонстрационный каталог из 60 товаров
pub fn mock_catalog() -> Result<ItemCatalog, CatalogError> {
    ItemCatalog::new(generate_mock_carpets(MOCK_CATALOG_SIZE))
}
