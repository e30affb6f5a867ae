use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::error::RevealError;
use crate::reveal::{RevealController, TimeoutScheduler, Visibility};

type Controller = RevealController<TimeoutScheduler>;

/// Live `IntersectionObserver` registration. Disconnects when dropped.
///
/// Only the observer and its JS callback are kept; the element itself stays
/// owned by the component tree.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
    fn start(target: &NodeRef, controller: Rc<Controller>) -> Result<Self, RevealError> {
        let window = web_sys::window().ok_or(RevealError::ObserverUnavailable)?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(RevealError::ObserverUnavailable);
        }
        let element = target.cast::<Element>().ok_or(RevealError::TargetMissing)?;

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                controller.observe(Visibility {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| RevealError::ObserverUnavailable)?;
        observer.observe(&element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns the ref to attach to the revealed element and whether it is active yet.
#[hook]
pub fn use_reveal(delay_ms: u32) -> (NodeRef, bool) {
    let node = use_node_ref();
    let active = use_state(|| false);

    {
        let node = node.clone();
        let set_active = active.setter();
        use_effect_with_deps(
            move |delay_ms| {
                let on_activate = Callback::from(move |_| set_active.set(true));
                let controller = Rc::new(RevealController::new(*delay_ms, TimeoutScheduler, on_activate));

                let observation = match Observation::start(&node, controller.clone()) {
                    Ok(observation) => Some(observation),
                    Err(e) => {
                        warn!("Showing content without reveal animation: {}", e);
                        controller.activate_now();
                        None
                    }
                };

                move || {
                    drop(observation);
                    controller.release();
                }
            },
            delay_ms,
        );
    }

    (node, *active)
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let (node, active) = use_reveal(props.delay);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), active.then_some("active"))}>
            { for props.children.iter() }
        </div>
    }
}
