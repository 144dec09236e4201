//! PageFrame — standard root wrapper for a page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_material--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// List of records — table with search.
pub const PAGE_CAT_LIST: &str = "list";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
