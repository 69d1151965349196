use leptos::{html, prelude::*};

use super::reveal::{header_classes, use_card_reveal, use_section_reveal};
use crate::{
    portfolio::{CategoryKind, SkillCategory, PORTFOLIO},
    reveal::RevealSet,
    settings::SKILL_STAGGER_MS,
};

const TECH_HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("AI/ML", "LLMs, RAG, Vector Search", "text-purple-600"),
    ("Performance", "20K+ Operations/Second", "text-green-600"),
    ("Architecture", "Microservices Expert", "text-blue-600"),
    ("Leadership", "Team & Technical Mentoring", "text-orange-600"),
];

struct Palette {
    icon: &'static str,
    color: &'static str,
    hover: &'static str,
    bar: &'static str,
}

fn palette(kind: CategoryKind) -> Palette {
    match kind {
        CategoryKind::Languages => Palette {
            icon: "⌨",
            color: "bg-blue-100 text-blue-700",
            hover: "bg-blue-200",
            bar: "bg-blue-700",
        },
        CategoryKind::Frameworks => Palette {
            icon: "🖥",
            color: "bg-green-100 text-green-700",
            hover: "bg-green-200",
            bar: "bg-green-700",
        },
        CategoryKind::Databases => Palette {
            icon: "🗄",
            color: "bg-purple-100 text-purple-700",
            hover: "bg-purple-200",
            bar: "bg-purple-700",
        },
        CategoryKind::Cloud => Palette {
            icon: "☁",
            color: "bg-orange-100 text-orange-700",
            hover: "bg-orange-200",
            bar: "bg-orange-700",
        },
        CategoryKind::Tools => Palette {
            icon: "⚙",
            color: "bg-red-100 text-red-700",
            hover: "bg-red-200",
            bar: "bg-red-700",
        },
        CategoryKind::Ai => Palette {
            icon: "🧠",
            color: "bg-teal-100 text-teal-700",
            hover: "bg-teal-200",
            bar: "bg-teal-700",
        },
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let is_visible = use_section_reveal(section_ref);
    let visible_categories = RwSignal::new(RevealSet::new());
    let hovered = RwSignal::new(None::<usize>);
    let skills = &PORTFOLIO.skills;

    view! {
        <section id="skills" class="py-20 bg-white" node_ref=section_ref>
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class=move || {
                        format!(
                            "reveal text-center mb-16 transform transition-all duration-1000 {}",
                            header_classes(is_visible.get()),
                        )
                    }>
                        <span class="inline-block mb-4 rounded-full bg-blue-100 text-blue-700 px-3 py-1 text-sm font-medium">
                            "Skills & Expertise"
                        </span>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">"Technical Proficiencies"</h2>
                        <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                            "A comprehensive toolkit spanning backend development, AI technologies, and modern cloud-native architectures."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                        {skills
                            .categories()
                            .into_iter()
                            .enumerate()
                            .map(|(index, category)| {
                                view! { <CategoryCard index category visible_categories hovered /> }
                            })
                            .collect_view()}
                    </div>

                    <div class=move || {
                        format!(
                            "reveal transform transition-all duration-1000 delay-500 {}",
                            header_classes(is_visible.get()),
                        )
                    }>
                        <div class="rounded-lg bg-gradient-to-r from-slate-50 to-blue-50 border border-blue-100 hover:shadow-xl transition-shadow duration-500 p-6">
                            <div class="flex items-center gap-3 mb-4">
                                <div class="bg-slate-200 p-3 rounded-xl text-2xl">"🧠"</div>
                                <h3 class="text-xl font-semibold text-slate-900">
                                    "System Design & Architecture"
                                </h3>
                            </div>
                            <p class="text-slate-600 mb-6">
                                "Advanced concepts in distributed systems, scalability, and software architecture"
                            </p>
                            <div class="flex flex-wrap gap-3">
                                {skills
                                    .system_design_concepts()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, concept)| {
                                        view! {
                                            <span
                                                class="rounded-full bg-slate-100 text-slate-700 hover:bg-blue-100 hover:text-blue-700 px-3 py-1 transition-all duration-300 transform hover:scale-105 text-sm font-medium"
                                                style=format!("transition-delay: {}ms", i * 30)
                                            >
                                                {concept.to_string()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || {
                        format!(
                            "reveal mt-16 transform transition-all duration-1000 delay-1000 {}",
                            header_classes(is_visible.get()),
                        )
                    }>
                        <div class="bg-gradient-to-r from-blue-50 to-slate-50 rounded-2xl p-8">
                            <h3 class="text-2xl font-semibold text-slate-900 mb-8 text-center">
                                "Technical Highlights & Achievements"
                            </h3>
                            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                                {TECH_HIGHLIGHTS
                                    .into_iter()
                                    .map(|(label, desc, color)| {
                                        view! {
                                            <div class="text-center bg-white rounded-lg p-6 hover:shadow-lg transition-all duration-300 transform hover:scale-105">
                                                <div class=format!("text-2xl font-bold mb-2 {color}")>
                                                    {label}
                                                </div>
                                                <p class="text-slate-600 text-sm">{desc}</p>
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
fn CategoryCard(
    index: usize,
    category: SkillCategory<'static>,
    visible_categories: RwSignal<RevealSet>,
    hovered: RwSignal<Option<usize>>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    use_card_reveal(card_ref, index, visible_categories);

    let is_card_visible = move || visible_categories.with(|s| s.is_revealed(index));
    let is_hovered = move || hovered.get() == Some(index);
    let Palette {
        icon,
        color,
        hover,
        bar,
    } = palette(category.kind);
    let count = category.items.len();

    view! {
        <div
            node_ref=card_ref
            data-index=index.to_string()
            class=move || {
                format!(
                    "reveal group rounded-lg border border-slate-200 p-6 hover:shadow-2xl transition-all duration-500 cursor-pointer transform {} {}",
                    if is_card_visible() {
                        "translate-y-0 opacity-100 scale-100"
                    } else {
                        "translate-y-12 opacity-0 scale-95"
                    },
                    if is_hovered() { "scale-105" } else { "hover:scale-105" },
                )
            }
            style=move || {
                format!(
                    "transition-delay: {}ms; background: {}",
                    index * SKILL_STAGGER_MS,
                    if is_hovered() {
                        "linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%)"
                    } else {
                        "linear-gradient(135deg, white 0%, #f8fafc 100%)"
                    },
                )
            }
            on:mouseenter=move |_| hovered.set(Some(index))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="flex items-center justify-between mb-4">
                <div class=move || {
                    format!(
                        "{color} {} p-3 rounded-xl transition-all duration-300 group-hover:scale-110 text-2xl",
                        if is_hovered() { hover } else { "" },
                    )
                }>{icon}</div>
                <span class=move || {
                    format!(
                        "text-slate-400 group-hover:text-blue-600 transform transition-all duration-300 {}",
                        if is_hovered() { "translate-x-1 text-blue-600" } else { "" },
                    )
                }>"›"</span>
            </div>
            <h3 class="text-lg font-semibold text-slate-900 group-hover:text-blue-700 transition-colors duration-300 mb-2">
                {category.title}
            </h3>
            <p class="text-sm text-slate-500 group-hover:text-slate-600 transition-colors duration-300 mb-4">
                {category.description}
            </p>
            <div class="flex flex-wrap gap-2">
                {category
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <span
                                class=move || {
                                    format!(
                                        "{color} rounded-full px-2 py-0.5 text-xs font-medium transition-all duration-300 transform hover:scale-110 hover:shadow-md {}",
                                        if is_hovered() { "scale-105" } else { "" },
                                    )
                                }
                                style=format!("transition-delay: {}ms", i * 50)
                            >
                                {skill.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-4 flex items-center justify-between">
                <span class="text-xs text-slate-400 group-hover:text-slate-500 transition-colors">
                    {format!("{count} skills")}
                </span>
                <div class=format!(
                    "w-16 h-1 {bar} rounded-full opacity-30 group-hover:opacity-60 transition-opacity",
                )></div>
            </div>
        </div>
    }
}
