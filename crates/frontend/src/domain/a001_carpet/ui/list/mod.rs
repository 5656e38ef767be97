pub mod state;

use crate::shared::components::filter_panel::{FilterOption, FilterRow};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::number_format::format_price;
use contracts::domain::a001_carpet::Carpet;
use contracts::enums::{CarpetCategory, MaterialKind, RoomScenario};
use contracts::shared::filter::{FilterDimension, SELECTION_ALL};
use leptos::prelude::*;
use state::CatalogViewEngine;

/// Строка карточки товара, уже локализованная
#[derive(Clone, Debug, PartialEq)]
pub struct CarpetCardRow {
    pub id: u32,
    pub name: String,
    pub caption: String,
    pub price: String,
    pub image_url: String,
}

impl CarpetCardRow {
    fn from_carpet(carpet: &Carpet, engine: &CatalogViewEngine, currency: &str) -> Self {
        let language = engine.language();
        let material = carpet.material.get(language);
        let caption = match carpet.scenario {
            Some(scenario) => format!("{} • {}", material, engine.localize(scenario.code())),
            None => material.to_string(),
        };

        Self {
            id: carpet.id.value(),
            name: carpet.name.get(language).to_string(),
            caption,
            price: format_price(carpet.price, currency),
            image_url: carpet.image_url.clone(),
        }
    }
}

/// Значения фильтра для измерения, начиная с `all`
fn dimension_values(dimension: FilterDimension) -> Vec<&'static str> {
    let tags: Vec<&'static str> = match dimension {
        FilterDimension::Category => CarpetCategory::all().iter().map(|c| c.code()).collect(),
        FilterDimension::Scenario => RoomScenario::all().iter().map(|s| s.code()).collect(),
        FilterDimension::Material => MaterialKind::all().iter().map(|m| m.code()).collect(),
    };
    std::iter::once(SELECTION_ALL).chain(tags).collect()
}

#[component]
pub fn CarpetList() -> impl IntoView {
    let state = leptos::context::use_context::<RwSignal<CatalogViewEngine>>()
        .expect("CatalogViewEngine context not found");

    let label = move |key: &'static str| move || state.with(|s| s.localize(key));

    let rows = move || {
        state.with(|s| {
            let currency = s.localize("priceCurrency");
            s.page()
                .items
                .into_iter()
                .map(|carpet| CarpetCardRow::from_carpet(carpet, s, &currency))
                .collect::<Vec<_>>()
        })
    };

    let filter_rows = FilterDimension::all()
        .into_iter()
        .map(|dimension| {
            let options = Signal::derive(move || {
                state.with(|s| {
                    dimension_values(dimension)
                        .into_iter()
                        .map(|value| FilterOption {
                            value,
                            label: s.localize(value),
                        })
                        .collect::<Vec<_>>()
                })
            });
            let selected =
                Signal::derive(move || state.with(|s| s.filters().get(dimension).as_str().to_string()));
            let title = Signal::derive(move || state.with(|s| s.localize(dimension.label_key())));
            let on_select = Callback::new(move |value: &'static str| {
                state.update(|s| s.set_filter(dimension, value));
            });

            view! {
                <FilterRow title=title options=options selected=selected on_select=on_select />
            }
        })
        .collect_view();

    view! {
        <div class="catalog">
            <nav class="catalog__filters">
                {filter_rows}
                {move || {
                    let count = state.with(|s| s.active_filter_count());
                    if count > 0 {
                        view! { <span class="badge badge--primary">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </nav>

            {move || {
                let rows = rows();
                if rows.is_empty() {
                    view! { <p class="catalog__empty">{label("emptyResult")}</p> }.into_any()
                } else {
                    view! {
                        <div class="catalog__grid">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <div class="carpet-card" data-id=row.id.to_string()>
                                            <div class="carpet-card__image">
                                                <img src=row.image_url alt=row.name.clone() />
                                            </div>
                                            <p class="carpet-card__caption">{row.caption}</p>
                                            <h3 class="carpet-card__name">{row.name}</h3>
                                            <p class="carpet-card__price">{row.price}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page()))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                page_label=Signal::derive(move || state.with(|s| s.page_label()))
                prev_label=Signal::derive(label("prevPage"))
                next_label=Signal::derive(label("nextPage"))
                on_prev=Callback::new(move |_| state.update(|s| s.prev_page()))
                on_next=Callback::new(move |_| state.update(|s| s.next_page()))
            />
        </div>
    }
}
