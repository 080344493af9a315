use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the application settings to every page via context.
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid application config, using defaults: {}", e);
        AppConfig::default()
    });
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
