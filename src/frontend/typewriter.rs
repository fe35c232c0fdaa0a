use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::typewriter::{visible_prefix, TypewriterPlan};

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or(1.5)]
    pub duration: f64,
    #[prop_or_default]
    pub start_delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let count = use_state(|| 0usize);

    {
        let count = count.clone();
        use_effect_with(
            (props.text.clone(), props.duration, props.start_delay),
            move |(text, duration, start_delay)| {
                count.set(0);
                let plan = TypewriterPlan::new(text, *duration, *start_delay);
                let needs_ticks = plan.needs_ticks();

                // Timer handles cancel on drop; the cleanup below owns all of them.
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();
                let finisher: Rc<RefCell<Option<Timeout>>> = Rc::default();

                let start = needs_ticks.then(|| {
                    let ticker = ticker.clone();
                    let finisher = finisher.clone();
                    Timeout::new(plan.start_delay_ms, move || {
                        let ticker_slot = ticker.clone();
                        let mut shown = 0;
                        let interval = Interval::new(plan.interval_ms, move || {
                            if plan.is_complete(shown) {
                                return;
                            }
                            shown = plan.advance(shown);
                            count.set(shown);
                            if plan.is_complete(shown) {
                                // An interval cannot drop itself from inside its own tick.
                                let ticker = ticker.clone();
                                *finisher.borrow_mut() = Some(Timeout::new(0, move || {
                                    ticker.borrow_mut().take();
                                }));
                            }
                        });
                        *ticker_slot.borrow_mut() = Some(interval);
                    })
                });

                move || {
                    drop(start);
                    ticker.borrow_mut().take();
                    finisher.borrow_mut().take();
                }
            },
        );
    }

    html! {
        <span class={props.class.clone()} style="display: inline-block;">
            { visible_prefix(&props.text, *count) }
        </span>
    }
}
