use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

/// Calls `on_scroll` with `window.scrollY` on every scroll event, and once on mount.
/// The listener is passive and is removed when the calling component unmounts.
#[hook]
pub fn use_passive_scroll(on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let callback = Closure::<dyn Fn()>::new({
                    let on_scroll = on_scroll.clone();
                    let window = window.clone();
                    move || {
                        if let Ok(scroll_y) = window.scroll_y() {
                            on_scroll.emit(scroll_y);
                        }
                    }
                });

                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    log::warn!("Failed to attach scroll listener: {:?}", e);
                }

                // Initial state
                if let Ok(scroll_y) = window.scroll_y() {
                    on_scroll.emit(scroll_y);
                }

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (),
    );
}
