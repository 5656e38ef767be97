//! Встроенные словари меток витрины (китайский и английский)

use crate::enums::Language;
use crate::shared::localization::LocalizationTable;

const LABELS_ZH: &[(&str, &str)] = &[
    ("title", "优质地毯精品店"),
    ("subtitle", "简约 · 舒适 · 自然"),
    ("materialLabel", "材质"),
    ("priceCurrency", "¥"),
    ("contactTitle", "联系我们"),
    ("email", "邮箱"),
    ("phone", "电话"),
    ("whatsapp", "WhatsApp 咨询"),
    ("prevPage", "上一页"),
    ("nextPage", "下一页"),
    ("pageOf", "第 {current} 页 / 共 {total} 页"),
    ("filterCategory", "分类"),
    ("filterScenario", "场景"),
    ("filterMaterial", "材质"),
    ("all", "全部"),
    ("carpet", "地毯"),
    ("mat", "地垫"),
    ("livingRoom", "客厅"),
    ("bedroom", "卧室"),
    ("entryway", "玄关"),
    ("cotton", "纯棉"),
    ("wool", "羊毛"),
    ("jute", "黄麻"),
    ("blended", "混纺"),
    ("linen", "亚麻"),
    ("emptyResult", "没有符合条件的商品"),
    ("languageToggle", "English"),
    ("copyright", "© {year} 优质地毯精品店"),
];

const LABELS_EN: &[(&str, &str)] = &[
    ("title", "Premium Carpet Boutique"),
    ("subtitle", "Simple · Comfortable · Natural"),
    ("materialLabel", "Material"),
    ("priceCurrency", "$"),
    ("contactTitle", "Contact Us"),
    ("email", "Email"),
    ("phone", "Phone"),
    ("whatsapp", "WhatsApp Us"),
    ("prevPage", "Previous"),
    ("nextPage", "Next"),
    ("pageOf", "Page {current} of {total}"),
    ("filterCategory", "Category"),
    ("filterScenario", "Scenario"),
    ("filterMaterial", "Material"),
    ("all", "All"),
    ("carpet", "Carpet"),
    ("mat", "Mat"),
    ("livingRoom", "Living Room"),
    ("bedroom", "Bedroom"),
    ("entryway", "Entryway"),
    ("cotton", "Cotton"),
    ("wool", "Wool"),
    ("jute", "Jute"),
    ("blended", "Blended"),
    ("linen", "Linen"),
    ("emptyResult", "No products match the selected filters"),
    ("languageToggle", "中文"),
    ("copyright", "© {year} Premium Carpet Boutique."),
];

fn labels_for(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Zh => LABELS_ZH,
        Language::En => LABELS_EN,
    }
}

/// Таблица переводов по умолчанию для обоих языков
pub fn default_translations() -> LocalizationTable {
    Language::all()
        .into_iter()
        .fold(LocalizationTable::new(), |table, language| {
            table.with_language(language, labels_for(language).iter().copied())
        })
}
