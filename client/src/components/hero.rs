//! Opening hero with the two primary calls to action.

use leptos::prelude::*;

use super::content::{CTA_HERO_PRIMARY, CTA_HERO_SECONDARY};

#[component]
pub fn Hero(on_open: Callback<Option<String>>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <div class="hero__pill">"📍 Pensado para negocios locales en Oaxaca"</div>
                <h1 class="hero__title">
                    "Más clientes sin complicarte"
                    <br/>
                    <span class="hero__accent">"Publicidad automática"</span>
                </h1>
                <p class="hero__lead">
                    "Súbelo una vez y nuestra IA publica tus anuncios, los optimiza y te trae clientes todos los días. Olvídate de batallar con Facebook o Google."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--cta" on:click=move |_| on_open.run(Some(CTA_HERO_PRIMARY.to_owned()))>
                        "Comenzar ahora →"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| on_open.run(Some(CTA_HERO_SECONDARY.to_owned()))>
                        "Probar gratis"
                    </button>
                </div>
            </div>
        </section>
    }
}
