//! Closing call to action and page footer.

use leptos::prelude::*;

use super::content::{BRAND, CTA_FINAL, CTA_FINAL_FREE, FOOTER_NOTE, INSTAGRAM_URL};

#[component]
pub fn FinalCta(on_open: Callback<Option<String>>) -> impl IntoView {
    view! {
        <section class="section">
            <div class="final-cta">
                <h2>"Haz crecer tu negocio hoy"</h2>
                <p>
                    "Únete a los negocios en Oaxaca que ya están vendiendo más con publicidad automática. Inicia en menos de 2 minutos."
                </p>
                <div class="final-cta__actions">
                    <button class="btn btn--cta" on:click=move |_| on_open.run(Some(CTA_FINAL.to_owned()))>
                        "Comenzar Ahora"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| on_open.run(Some(CTA_FINAL_FREE.to_owned()))>
                        "Probar Gratis"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="brand-mark">"⚡"</span>
                {BRAND}
            </div>
            <p class="footer__note">{FOOTER_NOTE}</p>
            <a class="footer__social" href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer">
                "Instagram"
            </a>
        </footer>
    }
}
