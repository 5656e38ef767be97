use crate::domain::a001_carpet::ui::list::state::CatalogViewEngine;
use crate::shared::icons::icon;
use contracts::enums::Language;
use leptos::prelude::*;
use web_sys::window;

/// Keep `<html lang>` in sync with the selected language.
fn apply_document_language(language: Language) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element());

    if let Some(root) = root {
        if let Err(e) = root.set_attribute("lang", language.code()) {
            log::debug!("failed to set document language: {:?}", e);
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let state = leptos::context::use_context::<RwSignal<CatalogViewEngine>>()
        .expect("CatalogViewEngine context not found");

    Effect::new(move |_| {
        apply_document_language(state.with(|s| s.language()));
    });

    let label = move |key: &'static str| move || state.with(|s| s.localize(key));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">{label("title")}</h1>
                <p class="header__subtitle">{label("subtitle")}</p>
            </div>
            <div class="header__actions">
                <button
                    class="button button--ghost"
                    aria-label="Toggle language"
                    on:click=move |_| state.update(|s| s.toggle_language())
                >
                    {icon("globe")}
                    <span>{label("languageToggle")}</span>
                </button>
            </div>
        </header>
    }
}
