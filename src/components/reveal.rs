use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::reveal::Reveal as RevealMachine;
use crate::motion::visibility::{ObserveFlow, VisibilityObserver};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Milliseconds to wait after the block first scrolls into view.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let delay = props.delay;
        use_effect_with_deps(
            move |_| {
                let machine = Rc::new(RefCell::new(RevealMachine::new(delay)));
                // Dropping the Timeout cancels it
                let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let on_visible = {
                            let machine = machine.clone();
                            let timer = timer.clone();
                            let revealed = revealed.clone();
                            move |fraction: f64| {
                                let Some(wait) = machine.borrow_mut().observe(fraction, js_sys::Date::now()) else {
                                    return ObserveFlow::Continue;
                                };
                                debug!("Reveal activated, showing in {}ms", wait);
                                show_when_due(machine.clone(), timer.clone(), revealed.clone());
                                ObserveFlow::Stop
                            }
                        };
                        match VisibilityObserver::observe(&element, config::REVEAL_THRESHOLD, on_visible) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                warn!("{}, showing content without animation", err);
                                machine.borrow_mut().force(js_sys::Date::now());
                                show_when_due(machine.clone(), timer.clone(), revealed.clone());
                                None
                            }
                        }
                    }
                    None => {
                        debug!("Reveal container not mounted, skipping observation");
                        None
                    }
                };

                move || {
                    machine.borrow_mut().detach();
                    timer.borrow_mut().take();
                    drop(observer);
                }
            },
            (),
        );
    }

    let style = format!(
        "transition: opacity {ms}ms ease-out, transform {ms}ms ease-out; {state}",
        ms = config::REVEAL_TRANSITION_MS,
        state = if *revealed {
            "opacity: 1; transform: translateY(0);".to_string()
        } else {
            format!("opacity: 0; transform: translateY({});", config::REVEAL_OFFSET)
        },
    );

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

/// Shows the content once `machine` says it is due, re-arming `timer` until
/// then. A detached machine leaves the content as it is.
fn show_when_due(machine: Rc<RefCell<RevealMachine>>, timer: Rc<RefCell<Option<Timeout>>>, revealed: UseStateHandle<bool>) {
    let due = machine.borrow().due_in(js_sys::Date::now());
    match due {
        Some(0) => revealed.set(true),
        Some(wait) => {
            let next = timer.clone();
            *timer.borrow_mut() = Some(Timeout::new(wait, move || show_when_due(machine, next, revealed)));
        }
        None => {}
    }
}
