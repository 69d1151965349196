use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    notify::{Toast, ToastId, ToastQueue, ToastVariant},
    settings::{TOAST_DURATION_MS, TOAST_LIMIT},
};

/// Handle to the page-wide toast queue.
#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn push(&self, toast: Toast) -> ToastId {
        self.0
            .try_update(|q| q.push(toast))
            .unwrap_or_default()
    }

    pub fn dismiss(&self, id: ToastId) {
        self.0.maybe_update(|q| q.dismiss(id));
    }
}

pub fn provide_toaster() {
    provide_context(Toasts(RwSignal::new(ToastQueue::new(TOAST_LIMIT))));
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let Toasts(queue) = use_toasts();
    view! {
        <ol
            class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full sm:max-w-[420px]"
            aria-live="polite"
        >
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|t| t.id
                let:toast
            >
                <ToastCard toast />
            </For>
        </ol>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let id = toast.id;
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| toasts.dismiss(id), TOAST_DURATION_MS);
    start(());

    let tone = match toast.variant {
        ToastVariant::Default => "bg-white text-slate-900 border-slate-200",
        ToastVariant::Destructive => "bg-red-600 text-white border-red-600",
    };
    view! {
        <li
            role="status"
            class=format!(
                "relative flex items-start justify-between gap-4 rounded-md border p-4 pr-8 shadow-lg {tone}",
            )
        >
            <div class="grid gap-1">
                <div class="text-sm font-semibold">{toast.title}</div>
                <div class="text-sm opacity-90">{toast.description}</div>
            </div>
            <button
                class="absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100"
                aria-label="Close"
                on:click=move |_| toasts.dismiss(id)
            >
                "✕"
            </button>
        </li>
    }
}
