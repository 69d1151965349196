use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::scroll::{scroll_to_section, SECTIONS};
use crate::portfolio::PORTFOLIO;

/// Year the site was built, used for the copyright line.
fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let person = &PORTFOLIO.personal;
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", person.name),
        None => format!("© {}. All rights reserved.", person.name),
    };

    view! {
        <footer class="bg-slate-900 text-white py-16">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="grid md:grid-cols-3 gap-12">
                        <div class="md:col-span-1">
                            <h3 class="text-2xl font-bold mb-4">{person.name.clone()}</h3>
                            <p class="text-slate-300 mb-6 leading-relaxed">
                                "Technical Lead & Backend Engineer specializing in AI-driven solutions and scalable cloud-native systems."
                            </p>
                            <div class="flex items-center gap-4">
                                <a
                                    href=format!("mailto:{}", person.email)
                                    class="bg-slate-800 hover:bg-slate-700 p-3 rounded-lg transition-colors"
                                    aria-label="Email"
                                >
                                    "✉"
                                </a>
                                <a
                                    href=person.linkedin.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="bg-slate-800 hover:bg-slate-700 p-3 rounded-lg transition-colors"
                                    aria-label="LinkedIn"
                                >
                                    "in"
                                </a>
                                <div class="bg-slate-800 p-3 rounded-lg" title=person.location.clone()>
                                    "📍"
                                </div>
                            </div>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                            <nav class="space-y-3">
                                // projects is reachable from the header only
                                {SECTIONS
                                    .into_iter()
                                    .filter(|(_, href)| *href != "#projects")
                                    .map(|(name, href)| {
                                        view! {
                                            <button
                                                on:click=move |_| {
                                                    scroll_to_section(href);
                                                }
                                                class="block text-slate-300 hover:text-white transition-colors"
                                            >
                                                {name}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold mb-4">"Contact Information"</h4>
                            <div class="space-y-3">
                                <div>
                                    <div class="text-slate-400 text-sm">"Email"</div>
                                    <a
                                        href=format!("mailto:{}", person.email)
                                        class="text-slate-300 hover:text-white transition-colors"
                                    >
                                        {person.email.clone()}
                                    </a>
                                </div>
                                <div>
                                    <div class="text-slate-400 text-sm">"Phone"</div>
                                    <a
                                        href=format!("tel:{}", person.phone)
                                        class="text-slate-300 hover:text-white transition-colors"
                                    >
                                        {person.phone.clone()}
                                    </a>
                                </div>
                                <div>
                                    <div class="text-slate-400 text-sm">"Location"</div>
                                    <div class="text-slate-300">{person.location.clone()}</div>
                                </div>
                            </div>
                            <span class="inline-block mt-6 rounded-full bg-green-800 text-green-100 hover:bg-green-700 px-3 py-1 text-sm">
                                "Available for Opportunities"
                            </span>
                        </div>
                    </div>

                    <div class="border-t border-slate-700 mt-12 pt-8">
                        <div class="flex flex-col md:flex-row items-center justify-between gap-4 text-slate-400 text-sm">
                            <div>{copyright}</div>
                            <div>"Built with " <span class="text-red-500">"♥"</span> " and Rust"</div>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
