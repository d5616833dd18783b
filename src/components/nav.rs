use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SiteConfig;
use crate::content::SECTIONS;
use crate::hooks::use_passive_scroll;

/// Measured position of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Returns the id of the section under the probe line. When spans overlap the
/// last one in document order wins.
pub fn active_section(
    spans: &[SectionSpan],
    scroll_y: f64,
    section_offset: f64,
    probe_offset: f64,
) -> Option<&str> {
    let probe = scroll_y + probe_offset;
    spans
        .iter()
        .filter(|span| {
            let top = span.offset_top - section_offset;
            probe >= top && probe < top + span.height
        })
        .last()
        .map(|span| span.id.as_str())
}

fn measure_sections() -> Vec<SectionSpan> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionSpan {
                id: section.id.to_string(),
                offset_top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
    /// Any click on the page; the flags say where it landed.
    Click { in_menu: bool, in_toggle: bool },
    Escape,
}

/// Next open/closed state of the mobile menu.
pub fn next_menu_state(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::LinkClicked | MenuEvent::Escape => false,
        MenuEvent::Click { in_menu, in_toggle } => open && (in_menu || in_toggle),
    }
}

/// Like [`next_menu_state`], but `None` when the event leaves the menu as it is.
/// A click on the toggle is seen by the window listener after the toggle's own
/// handler; returning `None` there keeps the window handler from undoing it.
pub fn menu_update(open: bool, event: MenuEvent) -> Option<bool> {
    let next = next_menu_state(open, event);
    (next != open).then_some(next)
}

fn contains(container: &NodeRef, target: Option<&Node>) -> bool {
    container
        .get()
        .map(|node| node.contains(target))
        .unwrap_or(false)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let active = use_state_eq(|| None::<String>);
    let menu_open = use_state_eq(|| false);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let active = active.clone();
        use_passive_scroll(Callback::from(move |scroll_y: f64| {
            let spans = measure_sections();
            let current = active_section(
                &spans,
                scroll_y,
                config.nav_section_offset,
                config.nav_probe_offset,
            );
            active.set(current.map(str::to_string));
        }));
    }

    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let event = MenuEvent::Click {
                in_menu: contains(&menu_ref, target.as_ref()),
                in_toggle: contains(&toggle_ref, target.as_ref()),
            };
            if let Some(next) = menu_update(*menu_open, event) {
                menu_open.set(next);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                if let Some(next) = menu_update(*menu_open, MenuEvent::Escape) {
                    menu_open.set(next);
                }
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(next_menu_state(*menu_open, MenuEvent::Toggle));
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(next_menu_state(*menu_open, MenuEvent::LinkClicked));
        })
    };

    let open_class = (*menu_open).then_some("open");

    html! {
        <>
            <button
                id="nav-toggle"
                class={classes!("nav__toggle", open_class)}
                aria-label="Toggle navigation"
                aria-expanded={(*menu_open).to_string()}
                ref={toggle_ref}
                onclick={toggle_menu}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav id="nav-menu" class={classes!("nav__menu", open_class)} ref={menu_ref}>
                { for SECTIONS.iter().map(|section| {
                    let is_active = active.as_deref() == Some(section.id);
                    html! {
                        <a
                            class={classes!("nav__link", is_active.then_some("active"))}
                            href={format!("#{}", section.id)}
                            onclick={close_menu.clone()}
                        >
                            {section.label}
                        </a>
                    }
                }) }
            </nav>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, offset_top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    fn page() -> Vec<SectionSpan> {
        vec![
            span("home", 0.0, 700.0),
            span("about", 700.0, 500.0),
            span("services", 1200.0, 600.0),
        ]
    }

    #[test]
    fn probe_line_selects_section() {
        let spans = page();
        assert_eq!(active_section(&spans, 0.0, 80.0, 100.0), Some("home"));
        // 520 + 100 = 620 = about.top (700 - 80)
        assert_eq!(active_section(&spans, 520.0, 80.0, 100.0), Some("about"));
        assert_eq!(active_section(&spans, 519.0, 80.0, 100.0), Some("home"));
        assert_eq!(active_section(&spans, 1100.0, 80.0, 100.0), Some("services"));
    }

    #[test]
    fn bottom_edge_is_exclusive() {
        let spans = vec![span("only", 80.0, 100.0)];
        // top = 0, bottom = 100
        assert_eq!(active_section(&spans, -100.0, 80.0, 100.0), Some("only"));
        assert_eq!(active_section(&spans, 0.0, 80.0, 100.0), None);
    }

    #[test]
    fn past_last_section_has_no_active_link() {
        assert_eq!(active_section(&page(), 5_000.0, 80.0, 100.0), None);
        assert_eq!(active_section(&[], 0.0, 80.0, 100.0), None);
    }

    #[test]
    fn overlapping_sections_pick_the_last_match() {
        let spans = vec![span("first", 0.0, 1_000.0), span("second", 200.0, 1_000.0)];
        assert_eq!(active_section(&spans, 300.0, 80.0, 100.0), Some("second"));
    }

    #[test]
    fn toggle_flips_menu() {
        assert!(next_menu_state(false, MenuEvent::Toggle));
        assert!(!next_menu_state(true, MenuEvent::Toggle));
    }

    #[test]
    fn link_click_and_escape_close_menu() {
        assert!(!next_menu_state(true, MenuEvent::LinkClicked));
        assert!(!next_menu_state(true, MenuEvent::Escape));
        assert!(!next_menu_state(false, MenuEvent::Escape));
    }

    #[test]
    fn only_outside_clicks_close_menu() {
        let outside = MenuEvent::Click { in_menu: false, in_toggle: false };
        let in_menu = MenuEvent::Click { in_menu: true, in_toggle: false };
        let in_toggle = MenuEvent::Click { in_menu: false, in_toggle: true };
        assert!(!next_menu_state(true, outside));
        assert!(next_menu_state(true, in_menu));
        assert!(next_menu_state(true, in_toggle));
        assert!(!next_menu_state(false, in_menu));
    }

    #[test]
    fn window_clicks_inside_never_write_state() {
        let in_toggle = MenuEvent::Click { in_menu: false, in_toggle: true };
        let in_menu = MenuEvent::Click { in_menu: true, in_toggle: false };
        for open in [false, true] {
            assert_eq!(menu_update(open, in_toggle), None);
            assert_eq!(menu_update(open, in_menu), None);
        }
    }

    #[test]
    fn window_updates_close_an_open_menu_only() {
        let outside = MenuEvent::Click { in_menu: false, in_toggle: false };
        assert_eq!(menu_update(true, outside), Some(false));
        assert_eq!(menu_update(false, outside), None);
        assert_eq!(menu_update(true, MenuEvent::Escape), Some(false));
        assert_eq!(menu_update(false, MenuEvent::Escape), None);
    }
}
