use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod hooks;
mod components {
    pub mod contact;
    pub mod fade_in;
    pub mod gallery;
    pub mod header;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <Home />
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
