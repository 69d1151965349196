use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    (
        "📈",
        "6+ Years Experience",
        "Building scalable SaaS platforms and AI-driven solutions",
    ),
    (
        "👥",
        "Team Leadership",
        "Led cross-functional teams and mentored junior engineers",
    ),
    (
        "🏆",
        "Technical Excellence",
        "Expert in Java, Spring Boot, AI technologies, and system design",
    ),
    (
        "🎯",
        "Business Impact",
        "Delivered solutions driving revenue growth and cost optimization",
    ),
];

const KEY_ACHIEVEMENTS: [(&str, &str, &str); 3] = [
    ("50%+", "Development Time Reduction", "Through CARGO platform"),
    ("45%", "Team Velocity Increase", "Through leadership optimization"),
    ("20%", "Infrastructure Cost Reduction", "Through system optimization"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="inline-block mb-4 rounded-full bg-blue-100 text-blue-700 px-3 py-1 text-sm font-medium">
                            "About Me"
                        </span>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">
                            "Passionate About Building Intelligent Systems"
                        </h2>
                        <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                            "I specialize in creating scalable backend systems and AI-powered solutions that drive business growth and enhance user experiences."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div>
                            <h3 class="text-2xl font-semibold text-slate-900 mb-6">
                                "Professional Journey"
                            </h3>
                            <div class="space-y-4 text-slate-600 leading-relaxed">
                                <p>
                                    "As a Technical Lead and Backend Engineer at Sirion, I've spent the last 6+ years building cloud-native, scalable SaaS platforms that serve enterprise clients globally."
                                </p>
                                <p>
                                    "My expertise spans from traditional backend development with Java and Spring Boot to cutting-edge AI technologies including LLMs, RAG systems, and knowledge graphs."
                                </p>
                                <p>
                                    "I'm particularly passionate about system design, distributed architectures, and mentoring the next generation of engineers. My work has consistently delivered measurable business impact, from driving revenue growth to optimizing operational costs."
                                </p>
                            </div>
                        </div>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                            {HIGHLIGHTS
                                .into_iter()
                                .map(|(icon, title, description)| {
                                    view! {
                                        <div class="rounded-lg border border-slate-200 p-6 hover:shadow-lg transition-shadow duration-300">
                                            <div class="bg-blue-100 p-3 rounded-lg mb-4 w-fit text-2xl">
                                                {icon}
                                            </div>
                                            <h4 class="font-semibold text-slate-900 mb-2">{title}</h4>
                                            <p class="text-sm text-slate-600">{description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="mt-16 bg-slate-50 rounded-2xl p-8">
                        <h3 class="text-2xl font-semibold text-slate-900 mb-8 text-center">
                            "Key Achievements"
                        </h3>
                        <div class="grid md:grid-cols-3 gap-8">
                            {KEY_ACHIEVEMENTS
                                .into_iter()
                                .map(|(value, label, via)| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-3xl font-bold text-blue-600 mb-2">{value}</div>
                                            <p class="text-slate-600">{label}</p>
                                            <p class="text-sm text-slate-500 mt-1">{via}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
