use crate::shared::icons::icon;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              top header                  |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="top-header">
                <div class="top-header__brand">
                    {icon("products")}
                    <span class="top-header__title">"Administración de tienda"</span>
                </div>
            </div>

            <div class="app-body">
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
