use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::count_up::CountUp as Counter;
use crate::motion::frames::{run_count_up, BrowserFrames};
use crate::motion::visibility::{ObserveFlow, VisibilityObserver};

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub end: u64,
    #[prop_or(config::COUNT_UP_DURATION_MS)]
    pub duration: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from 0 up to `end` the first time the number is half visible.
///
/// The counter is built once per mounted instance, so a later prop change
/// never restarts or replays the animation.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node = use_node_ref();
    let counter = {
        let (end, duration) = (props.end, props.duration);
        use_mut_ref(move || match Counter::new(end, duration) {
            Ok(counter) => counter,
            Err(err) => {
                warn!("{}, showing {} without animation", err, end);
                Counter::finished(end)
            }
        })
    };
    // Mirrors the counter so each frame re-renders
    let shown = use_state(|| 0u64);

    {
        let node = node.clone();
        let counter = counter.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let observer = if counter.borrow().has_started() {
                    None
                } else {
                    watch(&node, counter.clone(), shown)
                };

                move || {
                    counter.borrow_mut().cancel();
                    drop(observer);
                }
            },
            (),
        );
    }

    html! {
        <span ref={node} class="count-up">{ counter.borrow().display(&props.suffix) }</span>
    }
}

fn watch(node: &NodeRef, counter: Rc<RefCell<Counter>>, shown: UseStateHandle<u64>) -> Option<VisibilityObserver> {
    let Some(element) = node.cast::<Element>() else {
        debug!("Count-up node not mounted, skipping observation");
        return None;
    };

    let on_value: Rc<dyn Fn(u64)> = {
        let shown = shown.clone();
        Rc::new(move |current| shown.set(current))
    };

    let on_visible = {
        let counter = counter.clone();
        move |fraction: f64| {
            let started = counter.borrow_mut().observe(fraction);
            if started {
                debug!("Count-up to {} started", counter.borrow().target());
                run_count_up(Rc::new(BrowserFrames), counter.clone(), on_value.clone());
            }
            if counter.borrow().has_started() {
                ObserveFlow::Stop
            } else {
                ObserveFlow::Continue
            }
        }
    };

    match VisibilityObserver::observe(&element, config::COUNT_UP_THRESHOLD, on_visible) {
        Ok(observer) => Some(observer),
        Err(err) => {
            warn!("{}, showing final value", err);
            counter.borrow_mut().settle();
            shown.set(counter.borrow().current());
            None
        }
    }
}
