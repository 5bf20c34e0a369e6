//! Fixed top navigation: brand, section anchors, and the two header triggers.

use leptos::prelude::*;

use super::content::{BRAND, CTA_LOGIN, CTA_NAVBAR, NAV_LINKS};

/// Smooth-scroll the window back to the top.
fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn NavBar(on_open: Callback<Option<String>>) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand" on:click=move |_| scroll_to_top()>
                    <span class="brand-mark">"⚡"</span>
                    {BRAND}
                </div>
                <div class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.text}</a> })
                        .collect_view()}
                </div>
                <div class="nav__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_open.run(Some(CTA_LOGIN.to_owned()))>
                        "Entrar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_open.run(Some(CTA_NAVBAR.to_owned()))>
                        "Empezar Gratis"
                    </button>
                </div>
            </div>
        </nav>
    }
}
