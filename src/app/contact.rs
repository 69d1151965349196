use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::toaster::{use_toasts, Toasts};
use crate::{
    clipboard::{copy_with_notice, BrowserClipboard},
    contact::{ContactForm, Field, Lifetime},
    notify::Toast,
    portfolio::PORTFOLIO,
};

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    value: String,
    description: &'static str,
    action_label: &'static str,
    href: String,
    external: bool,
    copy_label: &'static str,
    copy_kind: &'static str,
    copy_text: String,
}

fn contact_methods() -> Vec<ContactMethod> {
    let person = &PORTFOLIO.personal;
    vec![
        ContactMethod {
            icon: "✉",
            title: "Email",
            value: person.email.clone(),
            description: "Best way to reach me for opportunities",
            action_label: "Send Email",
            href: format!("mailto:{}?subject=Professional Inquiry", person.email),
            external: false,
            copy_label: "Copy Email",
            copy_kind: "Email",
            copy_text: person.email.clone(),
        },
        ContactMethod {
            icon: "☎",
            title: "Phone",
            value: person.phone.clone(),
            description: "Available for calls during business hours",
            action_label: "Call Now",
            href: format!("tel:{}", person.phone),
            external: false,
            copy_label: "Copy Number",
            copy_kind: "Phone number",
            copy_text: person.phone.clone(),
        },
        ContactMethod {
            icon: "in",
            title: "LinkedIn",
            value: "Professional Network".to_string(),
            description: "Connect and view my professional updates",
            action_label: "View Profile",
            href: person.linkedin.clone(),
            external: true,
            copy_label: "Copy Link",
            copy_kind: "LinkedIn URL",
            copy_text: person.linkedin.clone(),
        },
    ]
}

fn copy_to_clipboard(toasts: Toasts, text: String, kind: &'static str) {
    spawn_local(async move {
        let toast = copy_with_notice(&BrowserClipboard, &text, kind).await;
        toasts.push(toast);
    });
}

async fn submit_delay() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(crate::settings::SUBMIT_DELAY).await;
}

#[component]
pub fn Contact() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section id="contact" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="inline-block mb-4 rounded-full bg-blue-100 text-blue-700 px-3 py-1 text-sm font-medium">
                            "Contact"
                        </span>
                        <h2 class="text-4xl font-bold text-slate-900 mb-6">"Let's Connect"</h2>
                        <p class="text-xl text-slate-600 max-w-3xl mx-auto">
                            "I'm always interested in discussing new opportunities, technical challenges, and innovative projects. Reach out through any of these channels."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8 mb-12">
                        {contact_methods()
                            .into_iter()
                            .map(|method| {
                                let ContactMethod { copy_text, copy_kind, .. } = &method;
                                let (copy_text, copy_kind) = (copy_text.clone(), *copy_kind);
                                view! {
                                    <div class="rounded-lg border border-slate-200 p-6 hover:shadow-lg transition-all duration-300 hover:scale-105">
                                        <div class="text-center pb-4">
                                            <div class="bg-blue-100 text-blue-600 p-4 rounded-2xl w-16 h-16 mx-auto mb-4 flex items-center justify-center text-2xl font-bold">
                                                {method.icon}
                                            </div>
                                            <h3 class="text-xl font-semibold text-slate-900">{method.title}</h3>
                                            <p class="text-slate-600 font-medium">{method.value}</p>
                                            <p class="text-sm text-slate-500 mt-2">{method.description}</p>
                                        </div>
                                        <div class="space-y-3">
                                            <a
                                                href=method.href
                                                target=method.external.then_some("_blank")
                                                rel=method.external.then_some("noopener noreferrer")
                                                class="block w-full text-center rounded-md bg-blue-600 hover:bg-blue-700 text-white py-2 font-medium"
                                            >
                                                {method.action_label}
                                                {method.external.then_some(" ↗")}
                                            </a>
                                            <button
                                                on:click=move |_| copy_to_clipboard(toasts, copy_text.clone(), copy_kind)
                                                class="w-full rounded-md border border-blue-600 text-blue-600 hover:bg-blue-50 py-2 font-medium"
                                            >
                                                "⧉ "
                                                {method.copy_label}
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <MessageForm />

                    <div class="bg-slate-50 rounded-2xl p-8">
                        <div class="text-center mb-8">
                            <h3 class="text-2xl font-semibold text-slate-900 mb-4">"Current Availability"</h3>
                            <div class="flex flex-wrap justify-center gap-6 text-slate-600">
                                <span>"✔ Available for new opportunities"</span>
                                <span>"✔ Open to consulting projects"</span>
                                <span>"📍 " {PORTFOLIO.personal.location.clone()}</span>
                            </div>
                        </div>
                        <div class="bg-white rounded-lg p-6">
                            <h4 class="font-semibold text-slate-900 mb-3 text-center">
                                "Preferred Contact Method"
                            </h4>
                            <p class="text-slate-600 text-center leading-relaxed">
                                "For the fastest response, please reach out via " <strong>"email"</strong>
                                ". I typically respond within 24 hours during business days. For urgent matters, feel free to call directly."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Contact form with a simulated send: nothing leaves the browser.
#[component]
fn MessageForm() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::default());

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let pending = match form.try_update(|f| f.begin_submit(&lifetime)) {
            Some(Ok(pending)) => pending,
            Some(Err(e)) => {
                toasts.push(Toast::destructive("Message not sent", e.to_string()));
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let settled = pending.settle(submit_delay()).await;
            // the signal is gone if the form unmounted while waiting
            if let Some(toast) = form.try_update(|f| f.apply(&settled)).flatten() {
                toasts.push(toast);
            }
        });
    };

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <div class="rounded-2xl border border-slate-200 p-8 mb-12">
            <h3 class="text-2xl font-semibold text-slate-900 mb-6 text-center">"Send a Message"</h3>
            <form class="grid gap-4 md:grid-cols-2" on:submit=on_submit>
                <TextField form field=Field::Name label="Name" placeholder="Your name" />
                <TextField
                    form
                    field=Field::Email
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                />
                <div class="md:col-span-2">
                    <TextField form field=Field::Subject label="Subject" placeholder="What's this about?" />
                </div>
                <label class="md:col-span-2 grid gap-2">
                    <span class="text-sm font-medium text-slate-700">"Message"</span>
                    <textarea
                        name="message"
                        required
                        rows="5"
                        placeholder="Tell me about your project or opportunity"
                        class="rounded-md border border-slate-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-600"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                </label>
                <div class="md:col-span-2">
                    <button
                        type="submit"
                        disabled=submitting
                        class="w-full rounded-md bg-blue-600 hover:bg-blue-700 disabled:opacity-60 disabled:cursor-not-allowed text-white py-3 font-medium"
                    >
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="grid gap-2">
            <span class="text-sm font-medium text-slate-700">{label}</span>
            <input
                type=input_type
                name=field.to_string()
                required
                placeholder=placeholder
                class="rounded-md border border-slate-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-600"
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}
