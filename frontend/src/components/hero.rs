use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::typewriter::Typewriter;
use crate::Route;

const DESTINATIONS: &[&str] = &["Canada", "the UK", "Australia", "Germany", "Ireland"];

struct Headline(Typewriter);

impl Reducible for Headline {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = self.0.clone();
        next.tick();
        Headline(next).into()
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let headline = use_reducer(|| Headline(Typewriter::new(DESTINATIONS, 14)));

    {
        let headline = headline.clone();
        use_interval(move || headline.dispatch(()), config::TYPEWRITER_TICK_MS);
    }

    html! {
        <header class="hero">
            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(160deg, #0b1d3a 0%, #123a6b 60%, #1c5fa8 100%);
                    color: #fff;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    margin-bottom: 1.5rem;
                }
                .hero .typed {
                    color: #ffcf5c;
                    border-right: 3px solid #ffcf5c;
                    padding-right: 4px;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    background: #ffcf5c;
                    color: #0b1d3a;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2.2rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
            <div class="hero-content">
                <h1>
                    {"Study in "}
                    <span class="typed">{headline.0.text()}</span>
                </h1>
                <p class="hero-subtitle">
                    {"From your first counselling call to the day you land, our advisors guide every step of your study-abroad journey."}
                </p>
                <Link<Route> to={Route::Contact} classes="forward-link">
                    <button class="hero-cta">{"Book a Free Consultation"}</button>
                </Link<Route>>
            </div>
        </header>
    }
}
