use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::{
    contact::ContactForm, fade_in::FadeIn, gallery::Gallery, header::Header,
};
use crate::content::{ABOUT, SERVICES};

#[function_component(Home)]
pub fn home() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: #101010;
                        color: #eee;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .section {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .services__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .card {
                        padding: 1.5rem;
                        border-radius: 8px;
                        background: #1a1a1a;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .btn {
                        display: inline-block;
                        padding: 0.75rem 1.75rem;
                        border: none;
                        border-radius: 6px;
                        background: #f5a623;
                        color: #101010;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .footer {
                        padding: 2rem;
                        text-align: center;
                        color: #888;
                    }
                "#}
            </style>
            <Header />
            <main>
                <section id="home" class="section hero">
                    <FadeIn>
                        <h1>{"PERO-GE.EX"}</h1>
                        <p>{"Excavation, earthworks and transport. Done right, the first time."}</p>
                        <a href="#contact" class="btn">{"Get a quote"}</a>
                    </FadeIn>
                </section>
                <section id="about" class="section">
                    <FadeIn>
                        <h2>{"About us"}</h2>
                        { for ABOUT.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </FadeIn>
                </section>
                <section id="services" class="section">
                    <h2>{"Services"}</h2>
                    <div class="services__grid">
                        { for SERVICES.iter().map(|service| html! {
                            <FadeIn class={classes!("card")}>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </FadeIn>
                        }) }
                    </div>
                </section>
                <section id="gallery" class="section">
                    <h2>{"Gallery"}</h2>
                    <Gallery />
                </section>
                <section id="contact" class="section">
                    <FadeIn>
                        <h2>{"Contact"}</h2>
                        <ContactForm />
                    </FadeIn>
                </section>
            </main>
            <footer class="footer">
                {format!("© {} PERO-GE.EX", year)}
            </footer>
        </>
    }
}
