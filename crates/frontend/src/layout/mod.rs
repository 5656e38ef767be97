pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page shell: header on top, footer at the bottom, content in between.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, subtitle, language)      |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |  Footer (contacts, copyright)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-shell">
            <Header />
            <main class="app-shell__content">{center()}</main>
            <Footer />
        </div>
    }
}
