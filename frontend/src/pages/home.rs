use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::inquiry_form::{FormVariant, InquiryForm};
use crate::components::step_slider::StepSlider;
use crate::pages::faq::Faq;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero />
            <StepSlider />
            <Faq />
            <section class="lead-section" id="apply">
                <h2>{"Start Your Journey"}</h2>
                <p>{"Tell us a little about your plans and an advisor will reach out within one working day."}</p>
                <InquiryForm variant={FormVariant::Lead} />
            </section>
            <style>
                {r#"
                .lead-section {
                    padding: 4rem 2rem 6rem;
                    text-align: center;
                    background: rgba(18, 58, 107, 0.04);
                }
                .lead-section h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }
                .lead-section p {
                    color: #556;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
