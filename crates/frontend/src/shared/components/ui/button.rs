use leptos::prelude::*;

/// Button component with variants (primary, secondary) and a busy state
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// While set the button is disabled and shows `busy_label` instead of its children
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: ChildrenFn,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };
    let is_busy = move || busy.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {}", variant_class())
            disabled=is_busy
            aria-busy=move || is_busy().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || {
                if is_busy() {
                    busy_label.get().unwrap_or_default().into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
