use leptos::prelude::*;

/// Input component with label and validation feedback
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Fired when the input loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Validation message; the input is marked invalid while it is set
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `step` attribute for number inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional)]
    maxlength: Option<usize>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let invalid = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class=move || if invalid() { "form__input form__input--invalid" } else { "form__input" }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                step=move || step.get()
                maxlength=maxlength.map(|m| m.to_string())
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                aria-invalid=move || invalid().to_string()
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
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
