//! Waitlist capture modal: form, submit lifecycle, and confirmation view.

#[cfg(test)]
#[path = "waitlist_modal_test.rs"]
mod waitlist_modal_test;

use leptos::prelude::*;

use crate::state::capture::CaptureModal;
use crate::state::form::{FormPhase, WaitlistForm};
use crate::state::lead::{BusinessCategory, EmployeeBracket, LeadField};

fn plan_caption(plan_interest: &str) -> String {
    format!("Interesado en: {plan_interest}")
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Registrando..." } else { "Unirme a la Lista" }
}

fn business_options() -> Vec<(&'static str, &'static str)> {
    BusinessCategory::ALL.iter().map(|c| (c.value(), c.label())).collect()
}

fn employee_options() -> Vec<(&'static str, &'static str)> {
    EmployeeBracket::ALL.iter().map(|b| (b.value(), b.label())).collect()
}

/// Modal dialog that collects a lead and inserts it into the waitlist store.
///
/// Visibility and the plan interest come from the page; the draft and the
/// submission lifecycle live here. `on_close` hides the modal.
#[component]
pub fn WaitlistModal(#[prop(into)] modal: Signal<CaptureModal>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(WaitlistForm::default());

    let dismiss = move || {
        form.update(WaitlistForm::dismiss);
        on_close.run(());
    };
    let on_backdrop = move |_| dismiss();
    let on_close_click = move |_| dismiss();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            dismiss();
        }
    };

    #[cfg(feature = "hydrate")]
    let store = StoredValue::new_local(std::rc::Rc::<dyn crate::net::store::WaitlistStore>::from(
        crate::net::store::store_from_build_env(),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(WaitlistForm::is_submitting) {
            return;
        }
        let plan_interest = modal.with_untracked(|m| m.plan_interest.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::store::{finish_success, submit_draft};
            use crate::state::form::SUCCESS_DISPLAY_DELAY;

            let Some(store) = store.try_get_value() else {
                return;
            };
            if submit_draft(&*store, &form, &plan_interest).await != Some(FormPhase::Succeeded) {
                return;
            }
            // Intended: closes whatever is open when the delay ends, even a
            // modal reopened from another call to action in the meantime.
            finish_success(&form, gloo_timers::future::sleep(SUCCESS_DISPLAY_DELAY), || on_close.run(())).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = plan_interest;
    };

    let succeeded = move || form.with(|f| f.phase() == FormPhase::Succeeded);
    let submitting = move || form.with(WaitlistForm::is_submitting);

    view! {
        <Show when=move || modal.with(|m| m.visible)>
            <div class="waitlist-modal__backdrop" on:click=on_backdrop>
                <div
                    class="waitlist-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="waitlist-modal__header">
                        <div>
                            <h3>"Unirse a la Lista de Espera"</h3>
                            <p class="waitlist-modal__plan">{move || modal.with(|m| plan_caption(&m.plan_interest))}</p>
                        </div>
                        <button class="waitlist-modal__close" type="button" on:click=on_close_click title="Cerrar">
                            "✕"
                        </button>
                    </div>

                    <div class="waitlist-modal__body">
                        <Show
                            when=succeeded
                            fallback=move || {
                                view! {
                                    <form class="waitlist-form" on:submit=on_submit>
                                        {move || {
                                            form.with(WaitlistForm::error_message)
                                                .map(|msg| view! { <div class="waitlist-form__error">"⚠ " {msg}</div> })
                                        }}
                                        <LeadInput form=form field=LeadField::FullName label="Nombre Completo" kind="text" placeholder="Juan Pérez"/>
                                        <div class="waitlist-form__row">
                                            <LeadInput form=form field=LeadField::Email label="Correo Electrónico" kind="email" placeholder="hola@negocio.com"/>
                                            <LeadInput form=form field=LeadField::Phone label="Teléfono / WhatsApp" kind="tel" placeholder="951 123 4567"/>
                                        </div>
                                        <div class="waitlist-form__row">
                                            <LeadSelect form=form field=LeadField::BusinessType label="Giro del Negocio" options=business_options()/>
                                            <LeadSelect form=form field=LeadField::EmployeesCount label="Empleados" options=employee_options()/>
                                        </div>
                                        <button class="btn btn--primary waitlist-form__submit" type="submit" disabled=submitting>
                                            {move || submit_label(submitting())}
                                        </button>
                                        <p class="waitlist-form__note">
                                            "Tus datos están protegidos y no compartiremos tu información."
                                        </p>
                                    </form>
                                }
                            }
                        >
                            <div class="waitlist-modal__success">
                                <div class="waitlist-modal__success-icon">"✓"</div>
                                <h4>"¡Gracias por registrarte!"</h4>
                                <p>"Te contactaremos pronto cuando tengamos cupo disponible."</p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Required text input bound to one draft field.
#[component]
fn LeadInput(
    form: RwSignal<WaitlistForm>,
    field: LeadField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="waitlist-form__field">
            <label for=field.name()>{label}</label>
            <input
                required
                type=kind
                id=field.name()
                name=field.name()
                placeholder=placeholder
                prop:value=move || form.with(|f| f.draft().get(field).to_owned())
                on:input=move |ev| {
                    form.update(|f| {
                        f.update_field(field, event_target_value(&ev));
                    });
                }
            />
        </div>
    }
}

/// Required select bound to one draft field. `options` are `(value, label)`.
#[component]
fn LeadSelect(
    form: RwSignal<WaitlistForm>,
    field: LeadField,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="waitlist-form__field">
            <label for=field.name()>{label}</label>
            <select
                required
                id=field.name()
                name=field.name()
                prop:value=move || form.with(|f| f.draft().get(field).to_owned())
                on:change=move |ev| {
                    form.update(|f| {
                        f.update_field(field, event_target_value(&ev));
                    });
                }
            >
                <option value="">"Selecciona..."</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
