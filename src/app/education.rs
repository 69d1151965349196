use leptos::prelude::*;

use crate::portfolio::PORTFOLIO;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 bg-slate-50">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="inline-block mb-4 rounded-full bg-blue-100 text-blue-700 px-3 py-1 text-sm font-medium">
                            "Education"
                        </span>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">"Academic Foundation"</h2>
                        <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                            "Strong educational background in computer science and technology, providing the foundation for technical excellence."
                        </p>
                    </div>

                    <div class="space-y-8">
                        {PORTFOLIO
                            .education
                            .iter()
                            .enumerate()
                            .map(|(index, edu)| {
                                view! {
                                    <div class="rounded-lg border border-slate-200 bg-white p-6 hover:shadow-lg transition-shadow duration-300">
                                        <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between gap-4">
                                            <div class="flex items-start gap-4">
                                                <div class="bg-blue-100 p-3 rounded-lg text-2xl">"🎓"</div>
                                                <div>
                                                    <h3 class="text-2xl font-bold text-slate-900 mb-2">
                                                        {edu.degree.clone()}
                                                    </h3>
                                                    <div class="text-xl font-semibold text-blue-600 mb-2">
                                                        {edu.institution.clone()}
                                                    </div>
                                                    <div class="flex flex-wrap items-center gap-4 text-slate-600">
                                                        <span>"📅 " {edu.duration.clone()}</span>
                                                        {edu
                                                            .location
                                                            .clone()
                                                            .map(|location| view! { <span>"📍 " {location}</span> })}
                                                    </div>
                                                </div>
                                            </div>
                                            <div class="flex items-center gap-2 bg-green-100 text-green-700 px-4 py-2 rounded-lg w-fit">
                                                <span class="font-semibold">"GPA: " {edu.gpa.clone()}</span>
                                            </div>
                                        </div>
                                        {(index == 0)
                                            .then(|| {
                                                view! {
                                                    <div class="bg-blue-50 rounded-lg p-6 mt-6">
                                                        <h4 class="font-semibold text-slate-900 mb-3">
                                                            "Academic Excellence"
                                                        </h4>
                                                        <p class="text-slate-600 text-sm leading-relaxed">
                                                            "Graduated with distinction from one of India's premier technical institutes, building a strong foundation in Information Technology, algorithms, data structures, and software engineering principles that continues to drive technical excellence."
                                                        </p>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-12 bg-white rounded-2xl p-8 border border-slate-200">
                        <div class="text-center">
                            <h3 class="text-2xl font-semibold text-slate-900 mb-4">"Continuous Learning"</h3>
                            <p class="text-slate-600 max-w-2xl mx-auto">
                                "Beyond formal education, I continuously stay updated with the latest technologies and industry trends, particularly in AI, machine learning, and distributed systems. My commitment to learning drives innovation in every project I undertake."
                            </p>
                        </div>
                        <div class="grid md:grid-cols-3 gap-8 mt-8">
                            <div class="text-center">
                                <div class="text-lg font-bold text-blue-600 mb-2">"NIT Graduate"</div>
                                <p class="text-slate-600 text-sm">"Premier Technical Institute"</p>
                            </div>
                            <div class="text-center">
                                <div class="text-lg font-bold text-blue-600 mb-2">"9.1 CGPA"</div>
                                <p class="text-slate-600 text-sm">"Academic Excellence"</p>
                            </div>
                            <div class="text-center">
                                <div class="text-lg font-bold text-blue-600 mb-2">"IT Specialization"</div>
                                <p class="text-slate-600 text-sm">"Information Technology"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
