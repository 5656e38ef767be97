//! Per-language label lookup with `{name}` placeholder substitution.

use crate::enums::Language;
use crate::shared::error::CatalogError;
use std::collections::{BTreeSet, HashMap};

/// Placeholder argument for a template label (`{key}` is replaced by `value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    pub key: &'static str,
    pub value: String,
}

impl MessageArg {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Таблица переводов: язык → (ключ метки → строка или шаблон)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizationTable {
    labels: HashMap<Language, HashMap<String, String>>,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить (или дополнить) словарь языка
    pub fn with_language<K, V>(
        mut self,
        language: Language,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let dictionary = self.labels.entry(language).or_default();
        for (key, value) in entries {
            dictionary.insert(key.into(), value.into());
        }
        self
    }

    pub fn insert(&mut self, language: Language, key: impl Into<String>, value: impl Into<String>) {
        self.labels
            .entry(language)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Загрузить таблицу из JSON вида `{ "zh": { "title": "..." }, "en": { ... } }`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;

        let mut table = Self::new();
        for (code, entries) in raw {
            let language = Language::from_code(&code)
                .ok_or_else(|| CatalogError::UnknownLanguage(code.clone()))?;
            table = table.with_language(language, entries);
        }

        table.validate()?;
        Ok(table)
    }

    /// Проверка полноты: каждый язык присутствует и содержит одинаковый набор ключей
    pub fn validate(&self) -> Result<(), CatalogError> {
        for language in Language::all() {
            if !self.labels.contains_key(&language) {
                return Err(CatalogError::MissingLanguage(language));
            }
        }

        let all_keys: BTreeSet<&str> = self
            .labels
            .values()
            .flat_map(|dictionary| dictionary.keys().map(String::as_str))
            .collect();

        for language in Language::all() {
            let dictionary = &self.labels[&language];
            if let Some(missing) = all_keys.iter().find(|key| !dictionary.contains_key(**key)) {
                return Err(CatalogError::MissingLabel {
                    key: missing.to_string(),
                    language,
                });
            }
        }

        Ok(())
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.labels
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .map(String::as_str)
    }

    /// Строка для языка; при отсутствии ключа возвращается сам ключ
    pub fn localize(&self, language: Language, key: &str) -> String {
        self.lookup(language, key).unwrap_or(key).to_string()
    }

    /// Шаблонная строка с подстановкой аргументов
    pub fn localize_with(&self, language: Language, key: &str, args: &[MessageArg]) -> String {
        interpolate(self.lookup(language, key).unwrap_or(key), args)
    }

    /// Ключи словаря языка в алфавитном порядке
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .labels
            .get(&language)
            .map(|dictionary| dictionary.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}

/// Replaces `{name}` tokens with matching argument values in one pass.
///
/// Substituted values are not scanned again. Tokens without a matching
/// argument and a trailing unmatched `{` are copied through unchanged.
pub fn interpolate(template: &str, args: &[MessageArg]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let token = &rest[start..];

        match token[1..].find('}') {
            Some(end) => {
                let name = &token[1..end + 1];
                match args.iter().find(|arg| arg.key == name) {
                    Some(arg) => result.push_str(&arg.value),
                    None => result.push_str(&token[..end + 2]),
                }
                rest = &token[end + 2..];
            }
            None => {
                result.push_str(token);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> LocalizationTable {
        LocalizationTable::new()
            .with_language(
                Language::Zh,
                [("title", "优质地毯精品店"), ("pageOf", "第 {current} 页 / 共 {total} 页")],
            )
            .with_language(
                Language::En,
                [("title", "Premium Carpet Boutique"), ("pageOf", "Page {current} of {total}")],
            )
    }

    #[test]
    fn test_localize_by_language() {
        let table = sample_table();
        assert_eq!(table.localize(Language::Zh, "title"), "优质地毯精品店");
        assert_eq!(table.localize(Language::En, "title"), "Premium Carpet Boutique");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let table = sample_table();
        assert_eq!(table.localize(Language::En, "nope"), "nope");
        assert_eq!(table.lookup(Language::En, "nope"), None);
    }

    #[test]
    fn test_localize_with_page_template() {
        let table = sample_table();
        let args = [MessageArg::new("current", "2"), MessageArg::new("total", "8")];
        assert_eq!(table.localize_with(Language::En, "pageOf", &args), "Page 2 of 8");
        assert_eq!(
            table.localize_with(Language::Zh, "pageOf", &args),
            "第 2 页 / 共 8 页"
        );
    }

    #[test]
    fn test_interpolate_edge_cases() {
        let args = [MessageArg::new("a", "{b}"), MessageArg::new("b", "B")];
        // значения подстановки повторно не разбираются
        assert_eq!(interpolate("x{a}y", &args), "x{b}y");
        assert_eq!(interpolate("{c} and {b}", &args), "{c} and B");
        assert_eq!(interpolate("open { brace", &args), "open { brace");
        assert_eq!(interpolate("{}", &args), "{}");
        assert_eq!(interpolate("plain", &[]), "plain");
    }

    #[test]
    fn test_validate_reports_missing_language() {
        let table = LocalizationTable::new().with_language(Language::En, [("title", "T")]);
        assert!(matches!(
            table.validate(),
            Err(CatalogError::MissingLanguage(Language::Zh))
        ));
    }

    #[test]
    fn test_validate_reports_missing_label() {
        let mut table = sample_table();
        table.insert(Language::En, "extra", "Extra");
        match table.validate() {
            Err(CatalogError::MissingLabel { key, language }) => {
                assert_eq!(key, "extra");
                assert_eq!(language, Language::Zh);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(sample_table().validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let table = LocalizationTable::from_json(
            r#"{"zh": {"title": "地毯"}, "en": {"title": "Rugs"}}"#,
        )
        .unwrap();
        assert_eq!(table.localize(Language::En, "title"), "Rugs");
        assert_eq!(table.keys(Language::Zh), vec!["title"]);

        let unknown = LocalizationTable::from_json(r#"{"fr": {"title": "Tapis"}}"#);
        assert!(matches!(unknown, Err(CatalogError::UnknownLanguage(code)) if code == "fr"));

        assert!(matches!(
            LocalizationTable::from_json("not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
