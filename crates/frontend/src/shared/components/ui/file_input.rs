use leptos::prelude::*;

/// File picker with an image preview
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// `accept` attribute, e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Receives the raw change event; the handler extracts the file
    #[prop(optional)]
    on_change: Option<Callback<web_sys::Event>>,
    /// Data URL shown under the input once available
    #[prop(optional, into)]
    preview: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

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
                type="file"
                class="form__file"
                accept=move || accept.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(ev);
                    }
                }
            />
            {move || preview.get().map(|src| view! {
                <img class="form__preview" src=src alt="Vista previa" />
            })}
        </div>
    }
}
