use yew::prelude::*;

use crate::components::nav::Nav;
use crate::config::SiteConfig;
use crate::hooks::use_passive_scroll;

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        let threshold = config.header_threshold;
        use_passive_scroll(Callback::from(move |scroll_y: f64| {
            scrolled.set(is_scrolled(scroll_y, threshold));
        }));
    }

    html! {
        <header id="header" class={classes!("header", (*scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem 2rem;
                        transition: padding 0.3s ease, background 0.3s ease;
                    }
                    .header.scrolled {
                        padding: 0.75rem 2rem;
                        background: rgba(20, 20, 20, 0.95);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3);
                    }
                    .header__logo {
                        color: #fff;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                    }
                    .nav__menu {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav__link {
                        color: #ddd;
                        text-decoration: none;
                    }
                    .nav__link.active {
                        color: #f5a623;
                    }
                    .nav__toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav__toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                        transition: transform 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .nav__toggle {
                            display: block;
                        }
                        .nav__menu {
                            position: fixed;
                            top: 0;
                            right: -100%;
                            height: 100vh;
                            flex-direction: column;
                            padding: 5rem 2rem;
                            background: #141414;
                            transition: right 0.3s ease;
                        }
                        .nav__menu.open {
                            right: 0;
                        }
                    }
                "#}
            </style>
            <a href="#home" class="header__logo">{"PERO-GE.EX"}</a>
            <Nav />
        </header>
    }
}
