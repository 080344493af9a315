//! PageFrame — root wrapper for every routed page.
//!
//! Sets `id` in the format `{entity}--{category}` (e.g. `"a002_product--create"`)
//! and `data-page-category`, so an id copied from the DOM inspector leads
//! straight to `domain/a002_product/`.

use leptos::prelude::*;

/// Record list page
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class("unknown"), "page");
    }
}
