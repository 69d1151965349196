use leptos::prelude::*;

use super::scroll::scroll_to_section;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn Hero() -> impl IntoView {
    let person = &PORTFOLIO.personal;

    view! {
        <section class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-50 to-blue-50 pt-20">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center">
                    <span class="inline-block mb-6 rounded-full bg-blue-100 text-blue-700 px-4 py-2 text-sm font-medium">
                        "Available for New Opportunities"
                    </span>
                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold text-slate-900 mb-6 leading-tight">
                        {person.name.clone()}
                    </h1>
                    <h2 class="text-2xl md:text-3xl lg:text-4xl font-semibold text-blue-600 mb-4">
                        {person.title.clone()}
                    </h2>
                    <p class="text-xl md:text-2xl text-slate-600 mb-8 font-medium">
                        {person.subtitle.clone()}
                    </p>
                    <div class="max-w-3xl mx-auto mb-10">
                        <p class="text-lg text-slate-600 leading-relaxed">{person.summary.clone()}</p>
                    </div>

                    <div class="flex flex-wrap items-center justify-center gap-6 mb-10 text-slate-600">
                        <div class="flex items-center gap-2">
                            <span aria-hidden="true">"📍"</span>
                            <span>{person.location.clone()}</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <span aria-hidden="true">"✉"</span>
                            <span>{person.email.clone()}</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <span aria-hidden="true">"in"</span>
                            <a
                                href=person.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-blue-600 transition-colors"
                            >
                                "LinkedIn Profile"
                            </a>
                        </div>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                        <button
                            on:click=move |_| {
                                scroll_to_section("#experience");
                            }
                            class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 text-lg rounded-md"
                        >
                            "View My Work"
                        </button>
                        <button
                            on:click=move |_| {
                                scroll_to_section("#contact");
                            }
                            class="border border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white px-8 py-3 text-lg rounded-md"
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="animate-bounce">
                        <button
                            on:click=move |_| {
                                scroll_to_section("#about");
                            }
                            class="text-slate-400 hover:text-blue-600 transition-colors text-2xl"
                            aria-label="Scroll to about"
                        >
                            "↓"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
