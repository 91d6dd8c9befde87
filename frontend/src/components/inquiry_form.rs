use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::lead::{submit, Acknowledgement, FieldEdit, LeadFormData, LeadSession, RequiredFields, TextField};
use crate::transport::{transport_from_config, NotificationTransport};

const COUNTRIES: &[&str] = &["Canada", "United Kingdom", "Australia", "Germany", "Ireland", "New Zealand", "United States"];
const SERVICES: &[&str] = &[
    "Undergraduate Admission",
    "Postgraduate Admission",
    "Visa Assistance",
    "Scholarship Guidance",
    "Test Preparation (IELTS/PTE)",
];
const TIMEFRAMES: &[&str] = &["Within 3 months", "3-6 months", "6-12 months", "Just exploring"];

#[derive(Clone, Copy, PartialEq)]
pub enum FormVariant {
    /// Full lead capture on the home page.
    Lead,
    /// Short contact form.
    Contact,
}

impl FormVariant {
    fn required(&self) -> RequiredFields {
        match self {
            FormVariant::Lead => RequiredFields::lead(),
            FormVariant::Contact => RequiredFields::contact(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InquiryFormProps {
    pub variant: FormVariant,
}

pub enum InquiryFormMsg {
    Edit(FieldEdit),
    Submit,
    Settled(LeadFormData, Acknowledgement),
}

pub struct InquiryForm {
    session: LeadSession,
    required: RequiredFields,
    transport: Rc<dyn NotificationTransport>,
}

impl Component for InquiryForm {
    type Message = InquiryFormMsg;
    type Properties = InquiryFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: LeadSession::default(),
            required: ctx.props().variant.required(),
            transport: transport_from_config(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            InquiryFormMsg::Edit(edit) => self.session.edit(edit),
            InquiryFormMsg::Submit => {
                let Some(mut form) = self.session.begin() else {
                    return false;
                };
                let required = self.required.clone();
                let transport = self.transport.clone();
                ctx.link().send_future(async move {
                    let deadline = TimeoutFuture::new(config::SUBMIT_TIMEOUT_MS);
                    let ack = submit(&mut form, &required, &*transport, deadline).await;
                    InquiryFormMsg::Settled(form, ack)
                });
                true
            }
            InquiryFormMsg::Settled(form, ack) => {
                self.session.finish(form);
                log::info!("inquiry settled: success={}", ack.is_success());
                acknowledge(&ack);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.required = ctx.props().variant.required();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.session.is_submitting();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            InquiryFormMsg::Submit
        });

        let fields = match ctx.props().variant {
            FormVariant::Lead => html! {
                <>
                    <div class="form-row">
                        { self.text_input(ctx, TextField::FirstName, "text", "First name") }
                        { self.text_input(ctx, TextField::LastName, "text", "Last name") }
                    </div>
                    <div class="form-row">
                        { self.text_input(ctx, TextField::Email, "email", "Email address") }
                        { self.text_input(ctx, TextField::Phone, "tel", "Phone number") }
                    </div>
                    <div class="form-row">
                        { self.select(ctx, TextField::Country, "Preferred destination", COUNTRIES) }
                        { self.select(ctx, TextField::Service, "Service interested in", SERVICES) }
                    </div>
                    { self.select(ctx, TextField::Timeframe, "When do you plan to start?", TIMEFRAMES) }
                    { self.textarea(ctx, "Anything else we should know?") }
                    { self.consent(ctx) }
                </>
            },
            FormVariant::Contact => html! {
                <>
                    { self.text_input(ctx, TextField::FirstName, "text", "Full name") }
                    { self.text_input(ctx, TextField::Email, "email", "Email address") }
                    { self.text_input(ctx, TextField::Phone, "tel", "Phone number") }
                    { self.select(ctx, TextField::Service, "Subject", SERVICES) }
                    { self.textarea(ctx, "Your message") }
                </>
            },
        };

        html! {
            <form class="inquiry-form" {onsubmit}>
                <style>
                    {r#"
                    .inquiry-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 640px;
                        margin: 0 auto;
                    }
                    .form-fields {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        border: none;
                        padding: 0;
                        margin: 0;
                    }
                    .form-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .form-row > * {
                        flex: 1;
                    }
                    .inquiry-form input,
                    .inquiry-form select,
                    .inquiry-form textarea {
                        width: 100%;
                        padding: 0.8rem 1rem;
                        border: 1px solid rgba(18, 58, 107, 0.25);
                        border-radius: 8px;
                        font-size: 1rem;
                    }
                    .inquiry-form textarea {
                        min-height: 120px;
                    }
                    .consent {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.9rem;
                    }
                    .consent input {
                        width: auto;
                    }
                    .submit-button {
                        background: #1c5fa8;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    @media (max-width: 768px) {
                        .form-row {
                            flex-direction: column;
                        }
                    }
                    "#}
                </style>
                <fieldset class="form-fields" disabled={submitting}>
                    { fields }
                </fieldset>
                <button type="submit" class="submit-button" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Inquiry" } }
                </button>
            </form>
        }
    }
}

impl InquiryForm {
    fn text_input(&self, ctx: &Context<Self>, field: TextField, kind: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            InquiryFormMsg::Edit(FieldEdit::Text(field, input.value()))
        });

        html! {
            <input
                type={kind}
                {placeholder}
                aria-label={placeholder}
                value={self.session.form().get(field).to_string()}
                required={self.required.contains(field)}
                {oninput}
            />
        }
    }

    fn select(&self, ctx: &Context<Self>, field: TextField, placeholder: &'static str, options: &'static [&'static str]) -> Html {
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            InquiryFormMsg::Edit(FieldEdit::Text(field, select.value()))
        });
        let current = self.session.form().get(field);

        html! {
            <select aria-label={placeholder} required={self.required.contains(field)} {onchange}>
                <option value="" selected={current.is_empty()}>{placeholder}</option>
                { for options.iter().map(|option| html! {
                    <option value={*option} selected={current == *option}>{*option}</option>
                }) }
            </select>
        }
    }

    fn textarea(&self, ctx: &Context<Self>, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            InquiryFormMsg::Edit(FieldEdit::Text(TextField::Message, area.value()))
        });

        html! {
            <textarea
                {placeholder}
                aria-label={placeholder}
                value={self.session.form().message.clone()}
                required={self.required.contains(TextField::Message)}
                {oninput}
            />
        }
    }

    fn consent(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            InquiryFormMsg::Edit(FieldEdit::Consent(input.checked()))
        });

        html! {
            <label class="consent">
                <input type="checkbox" checked={self.session.form().consent} {onchange} />
                {"I agree to be contacted by an advisor by phone, email or WhatsApp."}
            </label>
        }
    }
}

/// Shows the outcome in a blocking browser dialog.
fn acknowledge(ack: &Acknowledgement) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(&ack.message()).is_err() {
            log::error!("could not show acknowledgement: {}", ack.message());
        }
    }
}
