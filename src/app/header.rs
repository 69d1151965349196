use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use super::scroll::{scroll_to_section, SECTIONS};
use crate::{nav::MobileMenu, portfolio::PORTFOLIO, settings::HEADER_SCROLL_PX};

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let menu_open = move || menu.with(|m| m.is_open());
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = move || scroll_y.get() > HEADER_SCROLL_PX;

    let go = move |href: &'static str| {
        scroll_to_section(href);
        menu.update(MobileMenu::navigated);
    };

    let nav_button = move |(name, href): (&'static str, &'static str), mobile: bool| {
        view! {
            <button
                on:click=move |_| go(href)
                class=if mobile {
                    "text-slate-600 hover:text-blue-600 transition-colors text-left font-medium"
                } else {
                    "text-slate-600 hover:text-blue-600 transition-colors duration-200 font-medium"
                }
            >
                {name}
            </button>
        }
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if is_scrolled() { "bg-white/95 backdrop-blur-sm shadow-sm" } else { "bg-transparent" },
            )
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-xl font-bold text-slate-800">
                        {PORTFOLIO.personal.name.clone()}
                    </div>

                    <nav class="hidden md:flex items-center space-x-8">
                        {SECTIONS.into_iter().map(|item| nav_button(item, false)).collect_view()}
                        <button
                            on:click=move |_| go("#contact")
                            class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-md font-medium"
                        >
                            "Get In Touch"
                        </button>
                    </nav>

                    <button
                        on:click=move |_| menu.update(MobileMenu::toggle)
                        class="md:hidden text-slate-600 hover:text-blue-600 transition-colors text-2xl"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                {move || {
                    if menu_open() {
                        Either::Left(
                            view! {
                                <nav class="md:hidden mt-4 pb-4 border-t border-slate-200">
                                    <div class="flex flex-col space-y-3 pt-4">
                                        {SECTIONS
                                            .into_iter()
                                            .map(|item| nav_button(item, true))
                                            .collect_view()}
                                        <button
                                            on:click=move |_| go("#contact")
                                            class="bg-blue-600 hover:bg-blue-700 text-white mt-2 w-full py-2 rounded-md font-medium"
                                        >
                                            "Get In Touch"
                                        </button>
                                    </div>
                                </nav>
                            },
                        )
                    } else {
                        Either::Right(())
                    }
                }}
            </div>
        </header>
    }
}
