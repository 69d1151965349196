use leptos::{html, prelude::*};
use leptos_use::{
    core::IntoElementsMaybeSignal, js, use_intersection_observer_with_options, use_supported,
    UseIntersectionObserverOptions,
};
use web_sys::IntersectionObserverEntry;

use crate::{
    reveal::{fallback_visible, RevealSet, Threshold},
    settings::{CARD_REVEAL, SECTION_REVEAL},
};

/// Calls `on_visible` whenever `target` intersects the viewport by at least `threshold`.
///
/// Browsers without `IntersectionObserver` get `on_visible` once on mount, so nothing stays
/// hidden behind an animation that can never start.
pub fn use_reveal<Els, M, F>(target: Els, threshold: Threshold, on_visible: F)
where
    Els: IntoElementsMaybeSignal<web_sys::Element, M>,
    F: Fn() + Clone + 'static,
{
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));
    use_intersection_observer_with_options(
        target,
        {
            let on_visible = on_visible.clone();
            move |entries: Vec<IntersectionObserverEntry>, _| {
                if entries.iter().any(IntersectionObserverEntry::is_intersecting) {
                    on_visible();
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold.ratio()]),
    );

    Effect::new(move |_| {
        if fallback_visible(is_supported.get()) {
            log::debug!("IntersectionObserver unavailable, showing content immediately");
            on_visible();
        }
    });
}

/// One-shot flag for a whole section's header animation.
pub fn use_section_reveal(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    use_reveal(target, SECTION_REVEAL, move || {
        if !visible.get_untracked() {
            set_visible.set(true);
        }
    });
    visible
}

/// Marks card `index` in `cards` once the card scrolls into view.
pub fn use_card_reveal<Els, M>(target: Els, index: usize, cards: RwSignal<RevealSet>)
where
    Els: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    use_reveal(target, CARD_REVEAL, move || {
        cards.maybe_update(|set| set.reveal(index));
    });
}

/// Classes for a section header sliding in.
pub fn header_classes(visible: bool) -> &'static str {
    if visible {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-8 opacity-0"
    }
}
