use leptos::{html, prelude::*};

use super::reveal::{header_classes, use_card_reveal, use_section_reveal};
use crate::{
    expansion::ExpansionSet,
    metrics::extract_metrics,
    portfolio::{Experience as Job, RoleTier, PORTFOLIO},
    reveal::{slide_classes, RevealSet},
    settings::{ACHIEVEMENTS_SHOWN, CARD_STAGGER_MS, TECHNOLOGIES_SHOWN},
};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let is_visible = use_section_reveal(section_ref);
    let visible_jobs = RwSignal::new(RevealSet::new());
    let expanded = RwSignal::new(ExpansionSet::with_default(0));

    view! {
        <section id="experience" class="py-20 bg-slate-50" node_ref=section_ref>
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class=move || {
                        format!(
                            "reveal text-center mb-16 transform transition-all duration-1000 {}",
                            header_classes(is_visible.get()),
                        )
                    }>
                        <span class="inline-block mb-4 rounded-full bg-blue-100 text-blue-700 px-3 py-1 text-sm font-medium">
                            "Experience"
                        </span>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">"Professional Journey"</h2>
                        <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                            "6+ years of progressive growth in backend engineering and technical leadership, driving innovation in AI and distributed systems."
                        </p>
                    </div>

                    <div class="relative">
                        <div class="absolute left-8 md:left-1/2 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-600 via-blue-400 to-blue-200 transform md:-translate-x-0.5"></div>
                        <div class="space-y-12">
                            {PORTFOLIO
                                .experience
                                .iter()
                                .enumerate()
                                .map(|(index, job)| {
                                    view! { <JobCard index job visible_jobs expanded /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobCard(
    index: usize,
    job: &'static Job,
    visible_jobs: RwSignal<RevealSet>,
    expanded: RwSignal<ExpansionSet>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    use_card_reveal(card_ref, index, visible_jobs);

    let is_card_visible = move || visible_jobs.with(|s| s.is_revealed(index));
    let is_expanded = move || expanded.with(|s| s.is_expanded(index));
    let metrics = extract_metrics(&job.achievements);
    let is_even = index % 2 == 0;
    let delay = index * CARD_STAGGER_MS;

    view! {
        <div
            node_ref=card_ref
            data-index=index.to_string()
            class=move || {
                format!(
                    "reveal relative transform transition-all duration-700 {}",
                    slide_classes(is_card_visible()),
                )
            }
            style=format!("transition-delay: {delay}ms")
        >
            <div
                class=move || {
                    format!(
                        "absolute left-6 md:left-1/2 w-4 h-4 bg-blue-600 rounded-full border-4 border-white shadow-lg transform md:-translate-x-1/2 transition-all duration-300 {}",
                        if is_card_visible() { "scale-100" } else { "scale-0" },
                    )
                }
                style=format!("transition-delay: {}ms", delay + 300)
            >
                <div class="absolute inset-0 bg-blue-600 rounded-full animate-ping opacity-25"></div>
            </div>

            <div class=if is_even {
                "ml-16 md:ml-0 md:pr-8 md:text-right md:w-1/2 md:mr-auto"
            } else {
                "ml-16 md:ml-0 md:pl-8 md:w-1/2 md:ml-auto"
            }>
                <div class="rounded-lg border border-slate-200 bg-white hover:shadow-xl transition-all duration-500 cursor-pointer group">
                    <div
                        class="p-6 pb-4"
                        role="button"
                        aria-expanded=move || is_expanded().to_string()
                        on:click=move |_| expanded.update(|s| s.toggle(index))
                    >
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-3">
                                <div class="text-2xl">{RoleTier::for_role(&job.role).glyph()}</div>
                                <div>
                                    <h3 class="text-xl font-bold text-slate-900 group-hover:text-blue-700 transition-colors duration-300">
                                        {job.role.clone()}
                                    </h3>
                                    <div class="text-lg font-semibold text-blue-600">
                                        {job.company.clone()}
                                    </div>
                                </div>
                            </div>
                            <div class="text-slate-400 group-hover:text-blue-600 transition-colors duration-300">
                                {move || if is_expanded() { "▲" } else { "▼" }}
                            </div>
                        </div>

                        <div class="flex flex-wrap items-center gap-4 text-slate-600 mt-3">
                            <span class="text-sm">"📅 " {job.duration.clone()}</span>
                            <span class="text-sm">"📍 " {job.location.clone()}</span>
                            <span class="rounded-full border border-slate-300 px-2 py-0.5 text-xs">
                                {if index == 0 {
                                    "Current Role".to_string()
                                } else {
                                    format!("Role {}", index + 1)
                                }}
                            </span>
                        </div>

                        {(!metrics.is_empty())
                            .then(|| {
                                view! {
                                    <div class="flex gap-4 mt-4">
                                        {metrics
                                            .iter()
                                            .map(|metric| {
                                                view! {
                                                    <div class="bg-blue-50 px-3 py-2 rounded-lg">
                                                        <div class="text-lg font-bold text-blue-600">
                                                            {metric.value.clone()}
                                                        </div>
                                                        <div class="text-xs text-blue-700">"Impact"</div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                    </div>

                    <div class=move || {
                        format!(
                            "px-6 transition-all duration-500 overflow-hidden {}",
                            if is_expanded() { "max-h-96 opacity-100 pb-6" } else { "max-h-0 opacity-0 pb-0" },
                        )
                    }>
                        <div class="space-y-6">
                            <div>
                                <div class=if is_even {
                                    "flex items-center gap-2 mb-4 md:justify-end"
                                } else {
                                    "flex items-center gap-2 mb-4"
                                }>
                                    <span class="text-green-600">"🏅"</span>
                                    <h4 class="font-semibold text-slate-900">"Key Achievements"</h4>
                                </div>
                                <div class="space-y-3">
                                    {job
                                        .achievements
                                        .iter()
                                        .take(ACHIEVEMENTS_SHOWN)
                                        .map(|achievement| {
                                            view! {
                                                <div class=if is_even {
                                                    "flex items-start gap-3 md:flex-row-reverse md:text-right"
                                                } else {
                                                    "flex items-start gap-3"
                                                }>
                                                    <span class="text-green-600 mt-0.5 flex-shrink-0">"↗"</span>
                                                    <p class="text-slate-600 text-sm leading-relaxed">
                                                        {achievement.clone()}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div>
                                <h4 class=if is_even {
                                    "font-semibold text-slate-900 mb-3 md:text-right"
                                } else {
                                    "font-semibold text-slate-900 mb-3"
                                }>"Technologies Used"</h4>
                                <div class=if is_even {
                                    "flex flex-wrap gap-2 md:justify-end"
                                } else {
                                    "flex flex-wrap gap-2"
                                }>
                                    {job
                                        .technologies
                                        .iter()
                                        .take(TECHNOLOGIES_SHOWN)
                                        .map(|tech| {
                                            view! {
                                                <span class="rounded-full bg-blue-50 text-blue-700 hover:bg-blue-100 px-2 py-0.5 text-xs transform hover:scale-105 transition-all duration-300">
                                                    {tech.clone()}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
