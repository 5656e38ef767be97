use crate::domain::a001_carpet::ui::list::state::CatalogViewEngine;
use crate::shared::config::ContactConfig;
use contracts::shared::localization::MessageArg;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let state = leptos::context::use_context::<RwSignal<CatalogViewEngine>>()
        .expect("CatalogViewEngine context not found");
    let contact = leptos::context::use_context::<ContactConfig>()
        .expect("ContactConfig context not found");

    let label = move |key: &'static str| move || state.with(|s| s.localize(key));
    let year = contact.copyright_year.to_string();
    let copyright = move || {
        state.with(|s| s.localize_with("copyright", &[MessageArg::new("year", year.clone())]))
    };

    let mailto = format!("mailto:{}", contact.email);
    let tel = format!("tel:{}", contact.phone.replace(' ', ""));
    let whatsapp_url = contact.whatsapp_url();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content">
                <div class="footer__contact">
                    <h4 class="footer__title">{label("contactTitle")}</h4>
                    <p>
                        {label("email")}": "
                        <a href=mailto>{contact.email.clone()}</a>
                    </p>
                    <p>
                        {label("phone")}": "
                        <a href=tel>{contact.phone.clone()}</a>
                    </p>
                    <p>
                        <a href=whatsapp_url target="_blank" class="footer__whatsapp">
                            {label("whatsapp")}
                        </a>
                    </p>
                </div>
                <p class="footer__copyright">{copyright}</p>
            </div>
        </footer>
    }
}
