mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod scroll;
mod skills;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::PORTFOLIO;
use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use toaster::{provide_toaster, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
                // animated sections start hidden; show them when scripts never run
                <noscript>
                    <style>".reveal { opacity: 1 !important; transform: none !important; }"</style>
                </noscript>
            </head>
            <body class="font-sans antialiased bg-white text-slate-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toaster();

    let person = &PORTFOLIO.personal;
    let name = person.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=person.summary.clone() />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <Toaster />
    }
}

/// The whole portfolio, one section per anchor.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=PORTFOLIO.personal.title.clone() />
        <Header />
        <main>
            <Hero />
            <About />
            <Experience />
            <Skills />
            <Projects />
            <Education />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-4xl font-bold">"Page not found."</h1>
            <a href="/" class="text-blue-600 hover:text-blue-700 font-medium">
                "Back to the portfolio"
            </a>
        </main>
    }
}
