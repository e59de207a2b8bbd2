use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{FUNNEL_STEP_DELAY_MS, FUNNEL_VISIBILITY_THRESHOLD};
use crate::error::PageError;

pub const FUNNEL_ID: &str = "hiring-funnel";

const STEPS: &[(&str, &str)] = &[
    ("1,000+", "Applicants sourced"),
    ("120", "Screened by our team"),
    ("25", "Technical interviews"),
    ("5", "Final candidates"),
    ("1", "Your next hire"),
];

pub fn reveal_delay(step: usize) -> u32 {
    step as u32 * FUNNEL_STEP_DELAY_MS
}

/// Which funnel steps carry the fade-in class. Revealing is one way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunnelReveal {
    revealed: Vec<bool>,
}

pub struct RevealStep(pub usize);

impl FunnelReveal {
    pub fn new(steps: usize) -> Self {
        FunnelReveal {
            revealed: vec![false; steps],
        }
    }

    pub fn is_revealed(&self, step: usize) -> bool {
        self.revealed.get(step).copied().unwrap_or(false)
    }
}

impl Reducible for FunnelReveal {
    type Action = RevealStep;

    fn reduce(self: Rc<Self>, RevealStep(step): RevealStep) -> Rc<Self> {
        if step >= self.revealed.len() || self.revealed[step] {
            return self;
        }
        let mut next = (*self).clone();
        next.revealed[step] = true;
        next.into()
    }
}

/// Staggers the reveal, one timer per step. The timers are never cancelled;
/// if the funnel goes away first the dispatch is simply lost.
fn schedule_reveal(reveal: &UseReducerHandle<FunnelReveal>, steps: usize) {
    for step in 0..steps {
        let reveal = reveal.clone();
        Timeout::new(reveal_delay(step), move || reveal.dispatch(RevealStep(step))).forget();
    }
}

type EntriesCallback = Closure<dyn FnMut(Array)>;

fn observe_funnel(
    target: &Element,
    reveal: UseReducerHandle<FunnelReveal>,
) -> Result<(IntersectionObserver, EntriesCallback), PageError> {
    let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if intersecting {
            schedule_reveal(&reveal, STEPS.len());
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FUNNEL_VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| PageError::observer(FUNNEL_ID, e))?;
    observer.observe(target);
    Ok((observer, callback))
}

#[function_component(HiringFunnel)]
pub fn hiring_funnel() -> Html {
    let node = use_node_ref();
    let reveal = use_reducer(|| FunnelReveal::new(STEPS.len()));

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let observed = match node.cast::<Element>() {
                    Some(target) => match observe_funnel(&target, reveal) {
                        Ok(observed) => Some(observed),
                        Err(e) => {
                            error!("Funnel animation disabled: {}", e);
                            None
                        }
                    },
                    None => None,
                };

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div id={FUNNEL_ID} class="hiring-funnel" ref={node}>
            { for STEPS.iter().enumerate().map(|(i, (count, label))| html! {
                <div class={classes!(
                    "flex", "flex-col", "items-center", "funnel-step",
                    reveal.is_revealed(i).then(|| "animate-fade-in-up")
                )}>
                    <span class="funnel-count">{*count}</span>
                    <span class="funnel-label">{*label}</span>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_staggered_by_fixed_delay() {
        let delays: Vec<u32> = (0..4).map(reveal_delay).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
    }

    #[test]
    fn reveal_is_idempotent_and_bounded() {
        let state = Rc::new(FunnelReveal::new(3));
        let state = state.reduce(RevealStep(1));
        let again = state.clone().reduce(RevealStep(1));
        assert!(Rc::ptr_eq(&state, &again));
        assert!(state.is_revealed(1));
        assert!(!state.is_revealed(0));

        let state = state.reduce(RevealStep(9));
        assert!(!state.is_revealed(9));
    }
}
