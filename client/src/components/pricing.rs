//! Pricing tiers. Each plan's button opens the capture form with the plan name.

use leptos::prelude::*;

use super::content::{PLAN_BUTTON_TEXT, PLANS, PRICING_GUARANTEES, Plan};
use super::sections::SectionHeading;

#[component]
pub fn Pricing(on_open: Callback<Option<String>>) -> impl IntoView {
    view! {
        <section id="pricing" class="section section--muted">
            <SectionHeading
                title="Planes diseñados para tu crecimiento"
                subtitle="Elige el plan que impulse tu negocio al siguiente nivel."
            />
            <div class="grid grid--3 pricing">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=*plan on_open=on_open/> }).collect_view()}
            </div>
            <div class="pricing__guarantees">
                {PRICING_GUARANTEES.iter().map(|g| view! { <span>"🛡 " {*g}</span> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan, on_open: Callback<Option<String>>) -> impl IntoView {
    let highlighted = plan.is_highlighted();
    let card_class = if highlighted { "plan plan--highlight" } else { "plan" };
    let button_class = if highlighted { "btn btn--cta plan__button" } else { "btn btn--outline plan__button" };

    view! {
        <div class=card_class>
            {plan.badge.map(|badge| view! { <div class="plan__badge">{badge}</div> })}
            <h3 class="plan__name">{plan.name}</h3>
            <p class="plan__description">{plan.description}</p>
            <div class="plan__price">
                <span class="plan__amount">{plan.price}</span>
                <span class="plan__period">{plan.period}</span>
            </div>
            <ul class="plan__features">
                {plan.features.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
            </ul>
            <button class=button_class on:click=move |_| on_open.run(Some(plan.name.to_owned()))>
                {PLAN_BUTTON_TEXT}
            </button>
        </div>
    }
}
