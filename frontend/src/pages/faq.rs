use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq-section" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>

            <FaqItem question="Which countries do you help with?">
                <p>{"We place students in Canada, the United Kingdom, Australia, Germany, Ireland, New Zealand and the United States. Our advisors will tell you honestly which of these fits your profile and budget."}</p>
            </FaqItem>

            <FaqItem question="Is the first consultation really free?">
                <p>{"Yes. The first counselling session costs nothing and carries no obligation. You leave with a shortlist of destinations and a rough budget."}</p>
            </FaqItem>

            <FaqItem question="When should I start my application?">
                <p>{"Ideally 9 to 12 months before your intake. Popular programs fill up early and visa processing can take several weeks."}</p>
            </FaqItem>

            <FaqItem question="Do you help with scholarships and visas?">
                <ul>
                    <li><strong>{"Scholarships:"}</strong>{" we identify merit and need-based awards you are eligible for and review your essays."}</li>
                    <li><strong>{"Visas:"}</strong>{" document checklists, financial proof, mock interviews and filing support."}</li>
                </ul>
            </FaqItem>

            <FaqItem question="What English tests are accepted?">
                <p>{"Most universities accept IELTS, PTE Academic or TOEFL iBT. Some waive the requirement if your previous degree was taught in English."}</p>
            </FaqItem>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .faq-section h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                    text-align: center;
                }

                .faq-item {
                    border: 1px solid rgba(18, 58, 107, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.2rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #1c5fa8;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease-out, padding 0.3s ease-out;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
