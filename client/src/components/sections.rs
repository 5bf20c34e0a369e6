//! Informational sections with no calls to action.

use leptos::prelude::*;

use super::content::{BENEFITS, Card, PAIN_POINTS, STEPS, TRUST_BADGES, USE_CASES};

/// Centered section title with optional subtitle.
#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>{title}</h2>
            {subtitle.map(|s| view! { <p>{s}</p> })}
        </div>
    }
}

fn card_view(card: Card) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__icon">{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.body}</p>
        </div>
    }
}

#[component]
pub fn Trust() -> impl IntoView {
    view! {
        <div class="trust">
            {TRUST_BADGES
                .iter()
                .map(|badge| view! { <div class="trust__badge">"🛡 " {*badge}</div> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <SectionHeading
                title="¿Te suena familiar?"
                subtitle="Sabemos que las PYMES pierden dinero por no anunciarse bien. Hacer publicidad sigue siendo difícil: demasiados botones, demasiadas reglas."
            />
            <div class="grid grid--3">{PAIN_POINTS.iter().map(|c| card_view(*c)).collect_view()}</div>
            <p class="problem__closer">
                "Hicimos algo mucho más simple. "
                <strong>"Como tener una agencia por una fracción del precio."</strong>
            </p>
        </section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section">
            <SectionHeading title="Tan fácil como enviar un mensaje"/>
            <div class="grid grid--3 steps">
                {STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="step">
                                <div class="step__num">{step.num}</div>
                                {card_view(step.card)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="section section--dark">
            <div class="benefits">
                <div>
                    <h2>
                        "Deja que la tecnología trabaje "
                        <span class="benefits__accent">"mientras tú atiendes tu negocio."</span>
                    </h2>
                    <p>
                        "Ya no necesitas contratar a un sobrino o pagarle miles de pesos a una agencia. Tienes el poder de una inteligencia artificial experta en ventas, trabajando 24/7 para ti."
                    </p>
                    <ul class="benefits__list">
                        {BENEFITS.iter().map(|b| view! { <li>"✓ " {*b}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="benefits__panel">
                    <p class="benefits__metric-label">"Rendimiento Semanal"</p>
                    <p class="benefits__metric">"+12 Clientes Nuevos"</p>
                    <p class="benefits__status">"IA Optimizando..."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section class="section">
            <SectionHeading
                title="Tu negocio sí puede vender más"
                subtitle="Solo necesita que te encuentren. Funciona para todo tipo de PYME en Oaxaca."
            />
            <div class="grid grid--6">
                {USE_CASES
                    .iter()
                    .map(|(icon, title)| {
                        view! {
                            <div class="use-case">
                                <div class="use-case__icon">{*icon}</div>
                                <span>{*title}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
