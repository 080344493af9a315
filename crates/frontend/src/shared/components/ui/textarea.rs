use leptos::prelude::*;

/// Textarea component with label, character counter and validation feedback
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Enables the "n / max" counter under the field
    #[prop(optional)]
    maxlength: Option<usize>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let invalid = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=move || if invalid() { "form__textarea form__input--invalid" } else { "form__textarea" }
                placeholder=textarea_placeholder
                rows=textarea_rows
                disabled=move || disabled.get().unwrap_or(false)
                aria-invalid=move || invalid().to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            {maxlength.map(|max| view! {
                <div class="form__hint">
                    {move || format!("{} / {}", value.with(|v| v.encode_utf16().count()), max)}
                </div>
            })}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
