use crate::shared::icons::icon;
use leptos::prelude::*;

/// Одна кнопка-вариант фильтра
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    /// Значение для установки фильтра (`all` или код тега)
    pub value: &'static str,
    /// Локализованная подпись
    pub label: String,
}

/// FilterRow component - one filter dimension rendered as a row of toggle buttons
///
/// The active option is underlined; clicking any option reports its value.
#[component]
pub fn FilterRow(
    /// Localized dimension title
    #[prop(into)]
    title: Signal<String>,

    /// Options including `all`
    #[prop(into)]
    options: Signal<Vec<FilterOption>>,

    /// Currently selected value
    #[prop(into)]
    selected: Signal<String>,

    /// Callback when an option is clicked
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="filter-row">
            {icon("filter")}
            <span class="filter-row__title">{move || format!("{}:", title.get())}</span>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        let is_active = move || selected.get() == value;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "filter-row__option filter-row__option--active"
                                    } else {
                                        "filter-row__option"
                                    }
                                }
                                on:click=move |_| on_select.run(value)
                            >
                                {option.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
