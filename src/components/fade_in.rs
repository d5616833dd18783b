use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::SiteConfig;

/// One-shot reveal: once visible, an element stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    /// Feeds one intersection report. Returns true only on the report that
    /// first makes the element visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.visible {
            self.visible = true;
            true
        } else {
            false
        }
    }
}

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node_ref = use_node_ref();
    let visible = use_state_eq(|| false);
    let reveal = use_mut_ref(Reveal::default);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        let threshold = config.fade_in_threshold;
        use_effect_with_deps(
            move |_| {
                let element = node_ref.cast::<Element>();
                let destructor: Box<dyn FnOnce()> = match element {
                    Some(element) if intersection_observer_supported() => {
                        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
                            let visible = visible.clone();
                            move |entries: Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if reveal.borrow_mut().observe(entry.is_intersecting()) {
                                        visible.set(true);
                                        observer.unobserve(&entry.target());
                                    }
                                }
                            }
                        });

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(threshold));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(e) => {
                                log::warn!("IntersectionObserver unavailable: {:?}", e);
                                visible.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    _ => {
                        // No observer support: show everything without animating.
                        visible.set(true);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={classes!("fade-in", props.class.clone(), (*visible).then_some("visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert_eq!(reveal, Reveal::default());
        assert!(reveal.observe(true));
        assert_ne!(reveal, Reveal::default());
    }

    #[test]
    fn scrolling_back_and_forth_never_reveals_twice() {
        let mut reveal = Reveal::default();
        let reveals = [true, false, true, false, true]
            .into_iter()
            .filter(|intersecting| reveal.observe(*intersecting))
            .count();
        assert_eq!(reveals, 1);
        assert!(!reveal.observe(true));
    }
}
