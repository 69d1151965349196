use leptos::prelude::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// In-page anchors, in page order, with their nav labels.
pub const SECTIONS: [(&str, &str); 6] = [
    ("About", "#about"),
    ("Experience", "#experience"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Education", "#education"),
    ("Contact", "#contact"),
];

/// Smooth-scrolls to the element matching `href` (a `#id` selector).
///
/// Returns false when nothing on the page matches.
pub fn scroll_to_section(href: &str) -> bool {
    let Ok(Some(el)) = document().query_selector(href) else {
        log::debug!("no section matches {href}");
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
