//! PageFrame: root wrapper for every page rendered inside a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id` and `data-page-category` on the page root.
///
/// A malformed id is logged, the page still renders.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a003_criterion--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: unexpected page id '{}'", page_id);
    }

    let base_class = match category {
        PAGE_CAT_TREE => "page page--tree",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
