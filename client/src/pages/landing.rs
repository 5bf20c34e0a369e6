//! Landing page: static marketing sections plus the waitlist capture modal.
//!
//! DESIGN
//! ======
//! The page owns the `CaptureModal` signal. Sections receive one `on_open`
//! callback and pass their call-to-action label; the modal reads the signal
//! and asks the page to close it.

use leptos::prelude::*;

use crate::components::final_cta::{FinalCta, Footer};
use crate::components::hero::Hero;
use crate::components::nav::NavBar;
use crate::components::pricing::Pricing;
use crate::components::sections::{Benefits, HowItWorks, Problem, Trust, UseCases};
use crate::components::waitlist_modal::WaitlistModal;
use crate::state::capture::CaptureModal;

#[component]
pub fn LandingPage() -> impl IntoView {
    let modal = RwSignal::new(CaptureModal::default());

    let on_open = Callback::new(move |label: Option<String>| {
        modal.update(|m| m.open(label.as_deref()));
    });
    let on_close = Callback::new(move |()| modal.update(CaptureModal::close));

    view! {
        <div class="landing">
            <WaitlistModal modal=modal on_close=on_close/>
            <NavBar on_open=on_open/>
            <main>
                <Hero on_open=on_open/>
                <Trust/>
                <Problem/>
                <HowItWorks/>
                <Benefits/>
                <UseCases/>
                <Pricing on_open=on_open/>
                <FinalCta on_open=on_open/>
            </main>
            <Footer/>
        </div>
    }
}
