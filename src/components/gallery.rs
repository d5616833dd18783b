use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config::{GalleryImage, SiteConfig};

/// Ordered gallery images, fixed for the lifetime of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct GallerySet {
    images: Vec<GalleryImage>,
}

impl GallerySet {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter()
    }

    /// `src` and `alt` for the lightbox image; both empty while closed.
    pub fn lightbox_image(&self, state: LightboxState) -> (String, String) {
        match state {
            LightboxState::Open(index) => self
                .get(index)
                .map(|image| (image.src.clone(), image.alt.clone()))
                .unwrap_or_default(),
            LightboxState::Closed => (String::new(), String::new()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Prev,
    Next,
}

impl LightboxAction {
    /// Keyboard shortcuts, only honoured while the lightbox is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

impl LightboxState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Applies `action` against a gallery of `len` images. Indices wrap in both
    /// directions; out-of-range opens and navigation on an empty gallery are ignored.
    pub fn apply(self, action: LightboxAction, len: usize) -> Self {
        match (self, action) {
            (_, LightboxAction::Open(index)) if index < len => Self::Open(index),
            (_, LightboxAction::Open(_)) => self,
            (_, LightboxAction::Close) => Self::Closed,
            (Self::Open(index), LightboxAction::Prev) if len > 0 => {
                Self::Open((index + len - 1) % len)
            }
            (Self::Open(index), LightboxAction::Next) if len > 0 => Self::Open((index + 1) % len),
            (state, _) => state,
        }
    }
}

/// Value for `body.style.overflow` while the lightbox is in `state`; `None` restores page scrolling.
pub fn body_overflow(state: LightboxState) -> Option<&'static str> {
    match state {
        LightboxState::Open(_) => Some("hidden"),
        LightboxState::Closed => None,
    }
}

/// True when the click landed on the backdrop itself rather than on something inside it.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, backdrop: Option<T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

fn set_body_overflow(overflow: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    let result = match overflow {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(e) = result {
        log::warn!("Failed to update body overflow: {:?}", e);
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let gallery = use_memo(|images| GallerySet::new(images.clone()), config.gallery);
    let state = use_state_eq(LightboxState::default);
    let lightbox_ref = use_node_ref();

    let dispatch = {
        let state = state.clone();
        let len = gallery.len();
        Callback::from(move |action: LightboxAction| {
            let next = state.apply(action, len);
            if next != *state {
                log::debug!("Lightbox {:?} -> {:?}", *state, next);
            }
            state.set(next);
        })
    };

    {
        use_effect_with_deps(
            |overflow: &Option<&'static str>| {
                set_body_overflow(*overflow);
                || set_body_overflow(None)
            },
            body_overflow(*state),
        );
    }

    {
        let state = state.clone();
        let dispatch = dispatch.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !state.is_open() {
                return;
            }
            if let Some(action) = LightboxAction::from_key(&e.key()) {
                dispatch.emit(action);
            }
        });
    }

    let on_close = dispatch.reform(|_: MouseEvent| LightboxAction::Close);

    let on_backdrop = {
        let dispatch = dispatch.clone();
        let lightbox_ref = lightbox_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if is_backdrop_click(target, lightbox_ref.cast::<Element>()) {
                dispatch.emit(LightboxAction::Close);
            }
        })
    };

    let nav_button = |action: LightboxAction| {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatch.emit(action);
        })
    };

    if gallery.is_empty() {
        log::warn!("Gallery has no images");
        return html! {};
    }

    let (current_src, current_alt) = gallery.lightbox_image(*state);

    html! {
        <>
            <style>
                {r#"
                    .gallery__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1rem;
                    }
                    .gallery__item {
                        cursor: pointer;
                        overflow: hidden;
                        border-radius: 8px;
                    }
                    .gallery__item img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.3s ease;
                    }
                    .gallery__item:hover img {
                        transform: scale(1.05);
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        display: none;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.9);
                    }
                    .lightbox.active {
                        display: flex;
                    }
                    .lightbox__img {
                        max-width: 90vw;
                        max-height: 85vh;
                    }
                    .lightbox__close,
                    .lightbox__prev,
                    .lightbox__next {
                        position: absolute;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2.5rem;
                        cursor: pointer;
                    }
                    .lightbox__close { top: 1rem; right: 1.5rem; }
                    .lightbox__prev { left: 1.5rem; }
                    .lightbox__next { right: 1.5rem; }
                "#}
            </style>
            <div class="gallery__grid">
                { for gallery.iter().enumerate().map(|(index, image)| {
                    let onclick = dispatch.reform(move |_: MouseEvent| LightboxAction::Open(index));
                    html! {
                        <FadeIn class={classes!("gallery__cell")}>
                            <div class="gallery__item" onclick={onclick}>
                                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                            </div>
                        </FadeIn>
                    }
                }) }
            </div>
            <div
                id="lightbox"
                class={classes!("lightbox", state.is_open().then_some("active"))}
                ref={lightbox_ref}
                onclick={on_backdrop}
            >
                <button class="lightbox__close" aria-label="Close" onclick={on_close}>{"×"}</button>
                <button class="lightbox__prev" aria-label="Previous" onclick={nav_button(LightboxAction::Prev)}>{"‹"}</button>
                <img class="lightbox__img" src={current_src} alt={current_alt} />
                <button class="lightbox__next" aria-label="Next" onclick={nav_button(LightboxAction::Next)}>{"›"}</button>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> GallerySet {
        GallerySet::new(
            (0..n)
                .map(|i| GalleryImage {
                    src: format!("/img/{}.jpg", i),
                    alt: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn open_shows_requested_image() {
        let set = gallery(4);
        let state = LightboxState::Closed.apply(LightboxAction::Open(2), set.len());
        assert_eq!(state, LightboxState::Open(2));
        assert_eq!(set.get(2).map(|image| image.src.as_str()), Some("/img/2.jpg"));
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let len = 4;
        assert_eq!(
            LightboxState::Open(0).apply(LightboxAction::Prev, len),
            LightboxState::Open(3)
        );
        assert_eq!(
            LightboxState::Open(3).apply(LightboxAction::Next, len),
            LightboxState::Open(0)
        );
        assert_eq!(
            LightboxState::Open(1).apply(LightboxAction::Next, len),
            LightboxState::Open(2)
        );
    }

    #[test]
    fn prev_then_next_round_trips_for_every_index() {
        for len in 1..6 {
            for index in 0..len {
                let start = LightboxState::Open(index);
                let there_and_back = start
                    .apply(LightboxAction::Prev, len)
                    .apply(LightboxAction::Next, len);
                assert_eq!(there_and_back, start);
                let back_and_there = start
                    .apply(LightboxAction::Next, len)
                    .apply(LightboxAction::Prev, len);
                assert_eq!(back_and_there, start);
            }
        }
    }

    #[test]
    fn close_always_closes() {
        for state in [LightboxState::Closed, LightboxState::Open(0), LightboxState::Open(5)] {
            assert_eq!(state.apply(LightboxAction::Close, 6), LightboxState::Closed);
        }
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        assert_eq!(
            LightboxState::Closed.apply(LightboxAction::Next, 3),
            LightboxState::Closed
        );
    }

    #[test]
    fn empty_gallery_never_opens() {
        assert_eq!(
            LightboxState::Closed.apply(LightboxAction::Open(0), 0),
            LightboxState::Closed
        );
        assert_eq!(
            LightboxState::Open(0).apply(LightboxAction::Next, 0),
            LightboxState::Open(0)
        );
        assert_eq!(
            LightboxState::Open(0).apply(LightboxAction::Prev, 0),
            LightboxState::Open(0)
        );
    }

    #[test]
    fn lightbox_image_follows_state() {
        let set = gallery(3);
        assert_eq!(set.lightbox_image(LightboxState::Closed), (String::new(), String::new()));
        let (src, _) = set.lightbox_image(LightboxState::Open(0).apply(LightboxAction::Prev, 3));
        assert_eq!(src, "/img/2.jpg");
    }

    #[test]
    fn body_scroll_locks_while_open_and_restores_on_close() {
        let len = 3;
        let opened = LightboxState::Closed.apply(LightboxAction::Open(1), len);
        assert_eq!(body_overflow(opened), Some("hidden"));
        let moved = opened.apply(LightboxAction::Next, len);
        assert_eq!(body_overflow(moved), Some("hidden"));
        let closed = moved.apply(LightboxAction::Close, len);
        assert_eq!(body_overflow(closed), None);
        assert_eq!(body_overflow(LightboxState::default()), None);
    }

    #[test]
    fn only_clicks_on_the_backdrop_itself_close() {
        assert!(is_backdrop_click(Some("lightbox"), Some("lightbox")));
        assert!(!is_backdrop_click(Some("lightbox__img"), Some("lightbox")));
        assert!(!is_backdrop_click(None, Some("lightbox")));
        assert!(!is_backdrop_click(Some("lightbox"), None));
        assert!(!is_backdrop_click::<&str>(None, None));
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
        assert_eq!(LightboxAction::from_key("ArrowLeft"), Some(LightboxAction::Prev));
        assert_eq!(LightboxAction::from_key("ArrowRight"), Some(LightboxAction::Next));
        assert_eq!(LightboxAction::from_key("Enter"), None);
    }
}
