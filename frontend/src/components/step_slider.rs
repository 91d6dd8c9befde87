use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::carousel::{default_steps, AutoAdvance, Carousel, Step, Ticker};
use crate::config;

/// Emits a slider message on every interval tick. The `Interval` guard
/// cancels itself when dropped.
pub struct IntervalTicker {
    on_tick: Callback<()>,
}

impl Ticker for IntervalTicker {
    type Guard = Interval;

    fn start(&self, period_ms: u32) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(period_ms, move || on_tick.emit(()))
    }
}

#[derive(Properties, PartialEq)]
pub struct StepSliderProps {
    #[prop_or_else(default_steps)]
    pub steps: Vec<Step>,
    #[prop_or(AttrValue::Static("How It Works"))]
    pub heading: AttrValue,
}

pub enum StepSliderMsg {
    Tick,
    Next,
    Prev,
    GoTo(usize),
    Intersection(f64),
    Hover(bool),
}

pub struct StepSlider {
    carousel: Carousel,
    timer: AutoAdvance<IntervalTicker>,
    root: NodeRef,
    observer: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>,
    observer_unavailable: bool,
}

impl Component for StepSlider {
    type Message = StepSliderMsg;
    type Properties = StepSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let ticker = IntervalTicker {
            on_tick: ctx.link().callback(|_| StepSliderMsg::Tick),
        };
        Self {
            carousel: Carousel::new(ctx.props().steps.len()),
            timer: AutoAdvance::new(ticker, config::AUTO_ADVANCE_MS),
            root: NodeRef::default(),
            observer: None,
            observer_unavailable: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StepSliderMsg::Tick | StepSliderMsg::Next => {
                self.carousel.advance();
                true
            }
            StepSliderMsg::Prev => {
                self.carousel.retreat();
                true
            }
            StepSliderMsg::GoTo(index) => self.carousel.go_to(index),
            StepSliderMsg::Intersection(ratio) => {
                let command = self.carousel.observe_ratio(ratio);
                self.timer.apply(command);
                false
            }
            StepSliderMsg::Hover(hovered) => {
                let command = self.carousel.set_hovered(hovered);
                self.timer.apply(command);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let len = ctx.props().steps.len();
        if len != self.carousel.len() {
            let mut carousel = Carousel::new(len);
            carousel.set_visible(self.carousel.is_visible());
            carousel.set_hovered(self.carousel.is_paused());
            self.carousel = carousel;
            self.timer.sync(&self.carousel);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if needs_observer(self.observer.is_some(), self.observer_unavailable, &self.carousel) {
            self.observe(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        self.timer.stop();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let active = self.carousel.active_index();
        let Some(step) = props.steps.get(active) else {
            return html! {};
        };

        html! {
            <section
                ref={self.root.clone()}
                class={classes!("steps-slider", self.carousel.is_paused().then(|| "paused"))}
                data-autoplay={self.timer.is_running().to_string()}
                onmouseenter={link.callback(|_| StepSliderMsg::Hover(true))}
                onmouseleave={link.callback(|_| StepSliderMsg::Hover(false))}
            >
                <style>
                    {r#"
                    .steps-slider {
                        max-width: 900px;
                        margin: 4rem auto;
                        padding: 3rem 2rem;
                        text-align: center;
                    }
                    .steps-slider h2 {
                        font-size: 2.5rem;
                        margin-bottom: 2rem;
                    }
                    .step-card {
                        background: rgba(18, 58, 107, 0.06);
                        border: 1px solid rgba(18, 58, 107, 0.15);
                        border-radius: 16px;
                        padding: 2.5rem;
                        min-height: 200px;
                        animation: stepFade 0.5s ease-in-out;
                    }
                    @keyframes stepFade {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .step-number {
                        font-size: 0.9rem;
                        letter-spacing: 0.1em;
                        color: #1c5fa8;
                    }
                    .slider-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 1.5rem;
                    }
                    .slider-arrow {
                        background: none;
                        border: 1px solid #1c5fa8;
                        border-radius: 50%;
                        width: 40px;
                        height: 40px;
                        font-size: 1.4rem;
                        cursor: pointer;
                    }
                    .slider-dot {
                        width: 10px;
                        height: 10px;
                        margin: 0 4px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(18, 58, 107, 0.25);
                        cursor: pointer;
                    }
                    .slider-dot.active {
                        background: #1c5fa8;
                    }
                    "#}
                </style>
                <h2>{&props.heading}</h2>
                <div class="step-frame">
                    <div class="step-card" key={active.to_string()}>
                        <span class="step-number">{format!("STEP {:02}", active + 1)}</span>
                        <h3>{&step.title}</h3>
                        <p>{&step.description}</p>
                    </div>
                </div>
                <div class="slider-controls">
                    <button class="slider-arrow" aria-label="Previous step" onclick={link.callback(|_| StepSliderMsg::Prev)}>
                        {"‹"}
                    </button>
                    <div class="slider-dots">
                        { for (0..props.steps.len()).map(|index| html! {
                            <button
                                class={classes!("slider-dot", (index == active).then(|| "active"))}
                                aria-label={format!("Go to step {}", index + 1)}
                                onclick={link.callback(move |_| StepSliderMsg::GoTo(index))}
                            />
                        }) }
                    </div>
                    <button class="slider-arrow" aria-label="Next step" onclick={link.callback(|_| StepSliderMsg::Next)}>
                        {"›"}
                    </button>
                </div>
            </section>
        }
    }
}

impl StepSlider {
    fn observe(&mut self, ctx: &Context<Self>) {
        let Some(element) = self.root.cast::<Element>() else {
            return;
        };

        let on_ratio = ctx.link().callback(StepSliderMsg::Intersection);
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_ratio.emit(entry.intersection_ratio());
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::VISIBILITY_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                self.observer = Some((observer, callback));
            }
            Err(err) => {
                // Without an observer the slider just runs whenever it is not hovered.
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                self.observer_unavailable = true;
                ctx.link().send_message(StepSliderMsg::Intersection(1.0));
            }
        }
    }
}

/// The root node only exists once there is a step to show, so the observer
/// is attached on the first render that has one.
fn needs_observer(attached: bool, unavailable: bool, carousel: &Carousel) -> bool {
    !attached && !unavailable && !carousel.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_waits_for_steps_to_arrive() {
        let empty = Carousel::new(0);
        assert!(!needs_observer(false, false, &empty));

        let filled = Carousel::new(3);
        assert!(needs_observer(false, false, &filled));
    }

    #[test]
    fn observer_is_attached_once() {
        let carousel = Carousel::new(4);
        assert!(!needs_observer(true, false, &carousel));
        assert!(!needs_observer(false, true, &carousel));
    }
}
