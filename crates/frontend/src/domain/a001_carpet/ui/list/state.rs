use contracts::domain::a001_carpet::seed;
use contracts::domain::a001_carpet::{Carpet, ItemCatalog};
use contracts::enums::Language;
use contracts::shared::filter::{FilterDimension, FilterSelection, Selection};
use contracts::shared::localization::{LocalizationTable, MessageArg};
use contracts::shared::translations::default_translations;
use leptos::prelude::*;
use std::sync::Arc;

/// Текущая страница витрины
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Carpet>,
    /// Номер страницы (с единицы), уже приведённый к допустимому диапазону
    pub current_page: usize,
    pub total_pages: usize,
    /// Число товаров после фильтрации
    pub total_count: usize,
}

/// Состояние витрины: фильтры, страница и язык поверх неизменяемого каталога
///
/// Все операции тотальны: неизвестные теги дают пустую выборку,
/// переход на несуществующую страницу игнорируется.
#[derive(Clone, Debug)]
pub struct CatalogViewEngine {
    catalog: Arc<ItemCatalog>,
    labels: Arc<LocalizationTable>,

    // Фильтры
    filters: FilterSelection,

    // Клиентская пагинация (страницы с единицы)
    page: usize,
    page_size: usize,

    language: Language,
    default_language: Language,
}

impl CatalogViewEngine {
    /// `page_size` меньше единицы приводится к единице
    pub fn new(
        catalog: Arc<ItemCatalog>,
        labels: Arc<LocalizationTable>,
        page_size: usize,
        language: Language,
    ) -> Self {
        Self {
            catalog,
            labels,
            filters: FilterSelection::default(),
            page: 1,
            page_size: page_size.max(1),
            language,
            default_language: language,
        }
    }

    /// Сбросить фильтры, страницу и язык к состоянию сразу после `new`
    pub fn reset(&mut self) {
        self.filters = FilterSelection::default();
        self.page = 1;
        self.language = self.default_language;
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // ------------------------------------------------------------------
    // Изменение состояния
    // ------------------------------------------------------------------

    /// Любая смена фильтра возвращает на первую страницу
    pub fn set_filter(&mut self, dimension: FilterDimension, value: &str) {
        self.filters.set(dimension, Selection::from_value(value));
        self.page = 1;
        log::debug!("catalog filter {} = {}", dimension.code(), value);
    }

    /// Вариант `set_filter` с кодом измерения; неизвестный код ничего не меняет
    pub fn set_filter_code(&mut self, dimension: &str, value: &str) {
        match FilterDimension::from_code(dimension) {
            Some(dimension) => self.set_filter(dimension, value),
            None => log::debug!("ignoring unknown filter dimension '{}'", dimension),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        log::debug!("catalog language = {}", language);
    }

    /// Неизвестный код языка ничего не меняет
    pub fn set_language_code(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set_language(language),
            None => log::debug!("ignoring unknown language code '{}'", code),
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Переход выполняется только внутри `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) {
        let total_pages = self.total_pages();
        if (1..=total_pages).contains(&page) {
            self.page = page;
        } else {
            log::debug!("ignoring page {} outside 1..={}", page, total_pages);
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page().saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Производные значения
    // ------------------------------------------------------------------

    /// Товары, прошедшие все фильтры, в исходном порядке каталога
    pub fn filtered_items(&self) -> Vec<&Carpet> {
        self.matching().collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.matching().count()
    }

    fn matching(&self) -> impl Iterator<Item = &Carpet> + '_ {
        self.catalog
            .items()
            .iter()
            .filter(move |item| self.filters.matches(item))
    }

    /// Число измерений с выбором, отличным от `all` (для бейджа фильтров)
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// Всегда не меньше единицы, даже для пустой выборки
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    /// Текущая страница, приведённая к `[1, total_pages]`
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    pub fn page(&self) -> CatalogPage<'_> {
        let filtered = self.filtered_items();
        let total_count = filtered.len();
        let total_pages = total_pages(total_count, self.page_size);
        let current_page = self.page.clamp(1, total_pages);

        let items = filtered
            .into_iter()
            .skip((current_page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        CatalogPage {
            items,
            current_page,
            total_pages,
            total_count,
        }
    }

    // ------------------------------------------------------------------
    // Локализация
    // ------------------------------------------------------------------

    pub fn localize(&self, key: &str) -> String {
        self.labels.localize(self.language, key)
    }

    pub fn localize_with(&self, key: &str, args: &[MessageArg]) -> String {
        self.labels.localize_with(self.language, key, args)
    }

    /// Подпись вида «Page 2 of 8» для текущего состояния
    pub fn page_label(&self) -> String {
        let total_pages = self.total_pages();
        let current_page = self.page.clamp(1, total_pages);
        self.localize_with(
            "pageOf",
            &[
                MessageArg::new("current", current_page.to_string()),
                MessageArg::new("total", total_pages.to_string()),
            ],
        )
    }
}

fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

/// Состояние витрины с демонстрационным каталогом и встроенными переводами
pub fn create_state(page_size: usize, language: Language) -> RwSignal<CatalogViewEngine> {
    let catalog = seed::mock_catalog().unwrap_or_else(|e| {
        log::error!("mock catalog is invalid: {}", e);
        ItemCatalog::default()
    });
    log::info!("catalog loaded: {} items, page size {}", catalog.len(), page_size);

    RwSignal::new(CatalogViewEngine::new(
        Arc::new(catalog),
        Arc::new(default_translations()),
        page_size,
        language,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_carpet::aggregate::{CarpetId, LocalizedText};
    use contracts::enums::{CarpetCategory, MaterialKind, RoomScenario};

    fn mock_engine(page_size: usize) -> CatalogViewEngine {
        CatalogViewEngine::new(
            Arc::new(seed::mock_catalog().unwrap()),
            Arc::new(default_translations()),
            page_size,
            Language::Zh,
        )
    }

    /// Каталог, где ровно `wool` товаров из `total` шерстяные
    fn engine_with_wool(total: u32, wool: u32, page_size: usize) -> CatalogViewEngine {
        let items = (1..=total)
            .map(|id| {
                let kind = if id <= wool {
                    MaterialKind::Wool
                } else {
                    MaterialKind::Cotton
                };
                Carpet::new(
                    CarpetId::new(id),
                    LocalizedText::new(format!("地毯 {}", id), format!("Rug {}", id)),
                    LocalizedText::new("材质", "Material"),
                    100.0,
                    format!("https://example.com/{}.jpg", id),
                )
                .with_material_key(kind)
            })
            .collect();

        CatalogViewEngine::new(
            Arc::new(ItemCatalog::new(items).unwrap()),
            Arc::new(default_translations()),
            page_size,
            Language::En,
        )
    }

    fn ids(items: &[&Carpet]) -> Vec<u32> {
        items.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_defaults() {
        let engine = mock_engine(8);
        assert_eq!(engine.filtered_items().len(), 60);
        assert_eq!(engine.current_page(), 1);
        assert_eq!(engine.total_pages(), 8);
        assert_eq!(engine.filters(), &FilterSelection::default());
    }

    #[test]
    fn test_filter_conjunction() {
        let mut engine = mock_engine(8);
        engine.set_filter(FilterDimension::Category, "mat");
        engine.set_filter(FilterDimension::Scenario, "bedroom");

        let items = engine.filtered_items();
        assert!(!items.is_empty());
        for item in &items {
            assert_eq!(item.category, Some(CarpetCategory::Mat));
            assert_eq!(item.scenario, Some(RoomScenario::Bedroom));
        }
        let expected = engine
            .catalog()
            .items()
            .iter()
            .filter(|c| {
                c.category == Some(CarpetCategory::Mat) && c.scenario == Some(RoomScenario::Bedroom)
            })
            .count();
        assert_eq!(items.len(), expected);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut engine = mock_engine(8);
        engine.set_filter(FilterDimension::Material, "wool");
        let found = ids(&engine.filtered_items());
        let mut sorted = found.clone();
        sorted.sort_unstable();
        assert_eq!(found, sorted);
        assert_eq!(&found[..3], &[2, 7, 12]);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let mut engine = mock_engine(8);
        engine.set_filter(FilterDimension::Material, "silk");
        assert!(engine.filtered_items().is_empty());
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut engine = mock_engine(8);
        engine.go_to_page(4);
        assert_eq!(engine.current_page(), 4);
        engine.set_filter(FilterDimension::Category, "all");
        assert_eq!(engine.current_page(), 1);
    }

    #[test]
    fn test_page_clamped_after_shrink() {
        let mut engine = engine_with_wool(60, 10, 8);
        engine.go_to_page(5);
        assert_eq!(engine.current_page(), 5);

        engine.set_filter(FilterDimension::Material, "wool");
        let page = engine.page();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 8);
    }

    #[test]
    fn test_read_time_clamp_without_reset() {
        // страница устарела без смены фильтра: читаем последнюю допустимую
        let mut engine = engine_with_wool(60, 10, 8);
        engine.page = 5;
        engine.filters.set(FilterDimension::Material, Selection::from_value("wool"));
        let page = engine.page();
        assert_eq!(page.current_page, 2);
        assert_eq!(ids(&page.items), vec![9, 10]);
        assert_eq!(engine.current_page(), 2);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_ignored() {
        let mut engine = engine_with_wool(60, 10, 8);
        engine.set_filter(FilterDimension::Material, "wool");
        assert_eq!(engine.total_pages(), 2);

        engine.go_to_page(2);
        engine.go_to_page(5);
        assert_eq!(engine.current_page(), 2);
        engine.go_to_page(0);
        assert_eq!(engine.current_page(), 2);
    }

    #[test]
    fn test_remainder_page() {
        let mut engine = engine_with_wool(20, 14, 6);
        engine.set_filter(FilterDimension::Material, "wool");
        engine.go_to_page(3);

        let page = engine.page();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
        assert_eq!(ids(&page.items), vec![13, 14]);
        assert_eq!(page.total_count, 14);
    }

    #[test]
    fn test_empty_result() {
        let mut engine = mock_engine(8);
        engine.set_filter(FilterDimension::Category, "carpet");
        engine.set_filter(FilterDimension::Scenario, "garage");

        let page = engine.page();
        assert!(engine.filtered_items().is_empty());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        engine.next_page();
        assert_eq!(engine.current_page(), 1);
    }

    #[test]
    fn test_language_switch_preserves_state() {
        let mut engine = mock_engine(6);
        engine.set_filter(FilterDimension::Scenario, "livingRoom");
        engine.go_to_page(2);
        let before_ids = ids(&engine.page().items);
        let before_filters = engine.filters().clone();
        let title_zh = engine.localize("title");

        engine.set_language(Language::En);

        assert_eq!(engine.current_page(), 2);
        assert_eq!(engine.filters(), &before_filters);
        assert_eq!(ids(&engine.page().items), before_ids);
        assert_ne!(engine.localize("title"), title_zh);
        assert_eq!(engine.localize("title"), "Premium Carpet Boutique");
    }

    #[test]
    fn test_unknown_language_code_is_ignored() {
        let mut engine = mock_engine(8);
        engine.set_language_code("en");
        assert_eq!(engine.language(), Language::En);
        engine.set_language_code("de");
        assert_eq!(engine.language(), Language::En);
        engine.toggle_language();
        assert_eq!(engine.language(), Language::Zh);
    }

    #[test]
    fn test_set_filter_idempotent() {
        let mut once = mock_engine(8);
        once.go_to_page(3);
        once.set_filter(FilterDimension::Material, "jute");

        let mut twice = mock_engine(8);
        twice.go_to_page(3);
        twice.set_filter(FilterDimension::Material, "jute");
        twice.set_filter(FilterDimension::Material, "jute");

        assert_eq!(once.filters(), twice.filters());
        assert_eq!(once.current_page(), 1);
        assert_eq!(twice.current_page(), 1);
        assert_eq!(ids(&once.page().items), ids(&twice.page().items));
    }

    #[test]
    fn test_set_filter_code() {
        let mut engine = mock_engine(8);
        engine.set_filter_code("category", "mat");
        assert_eq!(engine.filters().category, Selection::Tag("mat".into()));
        engine.go_to_page(2);
        engine.set_filter_code("colour", "red");
        assert_eq!(engine.current_page(), 2);
    }

    #[test]
    fn test_next_prev_stay_in_range() {
        let mut engine = mock_engine(8);
        engine.prev_page();
        assert_eq!(engine.current_page(), 1);
        for _ in 0..20 {
            engine.next_page();
        }
        assert_eq!(engine.current_page(), 8);
        engine.prev_page();
        assert_eq!(engine.current_page(), 7);
    }

    #[test]
    fn test_page_label() {
        let mut engine = mock_engine(8);
        engine.go_to_page(2);
        assert_eq!(engine.page_label(), "第 2 页 / 共 8 页");
        engine.set_language(Language::En);
        assert_eq!(engine.page_label(), "Page 2 of 8");
    }

    #[test]
    fn test_reset() {
        let mut engine = mock_engine(8);
        engine.set_filter(FilterDimension::Scenario, "entryway");
        engine.go_to_page(2);
        engine.set_language(Language::En);

        engine.reset();
        assert_eq!(engine.filters(), &FilterSelection::default());
        assert_eq!(engine.current_page(), 1);
        assert_eq!(engine.language(), Language::Zh);
    }

    #[test]
    fn test_reset_restores_configured_language() {
        let mut engine = engine_with_wool(20, 5, 8);
        assert_eq!(engine.language(), Language::En);
        engine.set_language(Language::Zh);
        engine.set_filter(FilterDimension::Material, "wool");

        engine.reset();
        assert_eq!(engine.language(), Language::En);
        assert_eq!(engine.filtered_count(), 20);
    }

    #[test]
    fn test_filtered_count_matches_items() {
        let mut engine = mock_engine(8);
        engine.set_filter(FilterDimension::Category, "mat");
        assert_eq!(engine.filtered_count(), engine.filtered_items().len());
        assert_eq!(engine.filtered_count(), 20);
    }

    #[test]
    fn test_active_filter_count() {
        let mut engine = mock_engine(8);
        assert_eq!(engine.active_filter_count(), 0);
        engine.set_filter(FilterDimension::Category, "mat");
        engine.set_filter(FilterDimension::Material, "silk");
        assert_eq!(engine.active_filter_count(), 2);
        engine.set_filter(FilterDimension::Category, "all");
        assert_eq!(engine.active_filter_count(), 1);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let engine = mock_engine(0);
        assert_eq!(engine.page_size(), 1);
        assert_eq!(engine.total_pages(), 60);
    }
}
