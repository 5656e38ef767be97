use crate::domain::a001_carpet::ui::list::state::create_state;
use crate::domain::a001_carpet::ui::list::CarpetList;
use crate::layout::Shell;
use crate::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide the catalog view state to the whole page via context.
    provide_context(create_state(
        config.catalog.page_size,
        config.catalog.default_language,
    ));

    // Contact details for the footer
    provide_context(config.contact.clone());

    view! {
        <Shell center=|| view! { <CarpetList /> }.into_any() />
    }
}
