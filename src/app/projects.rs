use leptos::{html, prelude::*};

use super::reveal::{header_classes, use_card_reveal, use_section_reveal};
use crate::{
    portfolio::{Project, ProjectKind, PORTFOLIO},
    reveal::{slide_classes, RevealSet},
    settings::CARD_STAGGER_MS,
};

const TEASER_STATS: [(&str, &str, &str); 3] = [
    ("👥", "5+", "Team Members Led"),
    ("🎯", "100+", "Critical Bugs Resolved"),
    ("📈", "85%", "Code Coverage Achieved"),
];

fn icon(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Agent => "🧠",
        ProjectKind::Platform => "</>",
        ProjectKind::Service => "🗄",
        ProjectKind::Other => "🎯",
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let is_visible = use_section_reveal(section_ref);
    let visible_projects = RwSignal::new(RevealSet::new());

    view! {
        <section id="projects" class="py-20 bg-slate-50" node_ref=section_ref>
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class=move || {
                        format!(
                            "reveal text-center mb-16 transform transition-all duration-1000 {}",
                            header_classes(is_visible.get()),
                        )
                    }>
                        <span class="inline-block mb-4 rounded-full bg-blue-100 text-blue-700 px-3 py-1 text-sm font-medium">
                            "Key Projects"
                        </span>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">
                            "Featured Work & Innovations"
                        </h2>
                        <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                            "Highlighting the most impactful projects that showcase technical leadership and innovation in AI and distributed systems."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-8">
                        {PORTFOLIO
                            .projects
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <ProjectCard index project visible_projects /> }
                            })
                            .collect_view()}
                    </div>

                    <div class=move || {
                        format!(
                            "reveal mt-16 text-center transform transition-all duration-1000 delay-1000 {}",
                            header_classes(is_visible.get()),
                        )
                    }>
                        <div class="bg-gradient-to-r from-blue-50 to-slate-50 rounded-2xl p-8 border border-blue-100">
                            <div class="flex items-center justify-center gap-3 mb-4">
                                <span class="text-blue-600 text-2xl">"⚡"</span>
                                <h3 class="text-xl font-semibold text-slate-900">"More Innovations"</h3>
                            </div>
                            <p class="text-slate-600 mb-6 max-w-2xl mx-auto">
                                "These represent just a few of the 7+ major features and systems I've architected. Each project involved complex technical challenges, team coordination, and measurable business impact."
                            </p>
                            <div class="grid md:grid-cols-3 gap-6">
                                {TEASER_STATS
                                    .into_iter()
                                    .map(|(icon, value, label)| {
                                        view! {
                                            <div class="bg-white rounded-lg p-4 border border-slate-200 hover:border-blue-300 hover:shadow-md transition-all duration-300">
                                                <div class="mb-2">{icon}</div>
                                                <div class="text-lg font-bold text-slate-900">{value}</div>
                                                <div class="text-sm text-slate-600">{label}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    index: usize,
    project: &'static Project,
    visible_projects: RwSignal<RevealSet>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    use_card_reveal(card_ref, index, visible_projects);
    let is_card_visible = move || visible_projects.with(|s| s.is_revealed(index));

    view! {
        <div
            node_ref=card_ref
            data-index=index.to_string()
            class=move || {
                format!(
                    "reveal relative group rounded-lg border border-slate-200 p-6 hover:shadow-2xl hover:scale-105 transition-all duration-500 cursor-pointer transform {}",
                    slide_classes(is_card_visible()),
                )
            }
            style=format!(
                "transition-delay: {}ms; background: linear-gradient(135deg, white 0%, #f8fafc 100%)",
                index * CARD_STAGGER_MS,
            )
        >
            <div class="flex items-center gap-3 mb-4">
                <div class="bg-blue-100 group-hover:bg-blue-200 p-3 rounded-xl transition-colors duration-300 text-blue-600 font-bold">
                    {icon(ProjectKind::for_name(&project.name))}
                </div>
                <h3 class="flex-1 text-xl font-bold text-slate-900 group-hover:text-blue-700 transition-colors duration-300">
                    {project.name.clone()}
                </h3>
                <span class="text-slate-400 group-hover:text-blue-600 group-hover:translate-x-1 transition-all duration-300">
                    "›"
                </span>
            </div>

            <div class="space-y-6">
                <p class="text-slate-600 leading-relaxed group-hover:text-slate-700 transition-colors duration-300">
                    {project.description.clone()}
                </p>

                <div class="bg-green-50 group-hover:bg-green-100 border border-green-200 rounded-lg p-3 transition-colors duration-300">
                    <div class="flex items-center gap-2 mb-1">
                        <span class="text-green-600">"↗"</span>
                        <span class="font-semibold text-green-800 text-sm">"Impact"</span>
                    </div>
                    <p class="text-green-700 text-sm font-medium">{project.impact.clone()}</p>
                </div>

                <div class="space-y-3">
                    <span class="font-semibold text-slate-700 text-sm">"Technologies"</span>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="rounded-full bg-slate-100 text-slate-700 hover:bg-blue-100 hover:text-blue-700 px-2 py-0.5 transition-all duration-300 transform hover:scale-105 text-xs">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="opacity-0 group-hover:opacity-100 transition-opacity duration-500 absolute inset-0 bg-gradient-to-t from-blue-600/5 to-transparent rounded-lg pointer-events-none"></div>
            </div>
        </div>
    }
}
