use yew::prelude::*;

use crate::components::inquiry_form::{FormVariant, InquiryForm};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Get in Touch"}</h1>
                <p>{"Questions about universities, visas or costs? Send us a message and we will reply by email."}</p>
            </section>
            <section class="contact-body">
                <InquiryForm variant={FormVariant::Contact} />
                <div class="contact-details">
                    <p><strong>{"Email: "}</strong><a href="mailto:hello@horizonabroad.example">{"hello@horizonabroad.example"}</a></p>
                    <p><strong>{"Office hours: "}</strong>{"Mon-Sat, 10:00-18:00"}</p>
                </div>
            </section>
            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .contact-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }
                .contact-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .contact-body {
                    padding: 2rem;
                }
                .contact-details {
                    text-align: center;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
            </section>
        </div>
    }
}
