use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - previous/next buttons around a page label
///
/// Navigation is delegated to the callbacks; the buttons are disabled at the edges.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Localized "page X of Y" label
    #[prop(into)]
    page_label: Signal<String>,

    /// Localized button captions
    #[prop(into)]
    prev_label: Signal<String>,
    #[prop(into)]
    next_label: Signal<String>,

    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
                title=move || prev_label.get()
            >
                {icon("chevron-left")}
                <span>{move || prev_label.get()}</span>
            </button>
            <span class="pagination-info">{move || page_label.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
                title=move || next_label.get()
            >
                <span>{move || next_label.get()}</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
