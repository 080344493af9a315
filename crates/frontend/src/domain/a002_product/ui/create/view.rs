use super::view_model::ProductCreateViewModel;
use crate::shared::components::ui::{Button, Checkbox, FileInput, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a002_product::aggregate::ProductField;
use contracts::domain::a002_product::rules::{rules_for, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn ProductCreate() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let vm = ProductCreateViewModel::new(&config, move |path| {
        navigate(path, NavigateOptions::default())
    });
    vm.load_categories();

    let error = vm.error();
    let success = vm.success();

    view! {
        <PageFrame page_id="a002_product--create" category=PAGE_CAT_DETAIL>
            <PageHeader title="Nuevo producto" subtitle="Mantenimiento / Productos".to_string() />

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || success.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <form
                    class="details-form"
                    novalidate=true
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    <Select
                        id=ProductField::CategoryId.key().to_string()
                        label=ProductField::CategoryId.label().to_string()
                        value=vm.category_value()
                        options=vm.category_options()
                        placeholder=vm.category_placeholder()
                        error=vm.field_error(ProductField::CategoryId)
                        required=rules_for(ProductField::CategoryId).is_required()
                        disabled=vm.category_locked()
                        on_change=Callback::new(move |v| vm.set_category(v))
                        on_blur=Callback::new(move |_| vm.touch(ProductField::CategoryId))
                    />

                    <Input
                        id=ProductField::Name.key().to_string()
                        label=ProductField::Name.label().to_string()
                        value=vm.name()
                        placeholder="Ej. Silla plegable de madera"
                        maxlength=NAME_MAX_LENGTH
                        error=vm.field_error(ProductField::Name)
                        required=rules_for(ProductField::Name).is_required()
                        disabled=vm.inputs_locked()
                        on_input=Callback::new(move |v| vm.set_name(v))
                        on_blur=Callback::new(move |_| vm.touch(ProductField::Name))
                    />

                    <Textarea
                        id=ProductField::Description.key().to_string()
                        label=ProductField::Description.label().to_string()
                        value=vm.description()
                        placeholder="Descripción opcional"
                        maxlength=DESCRIPTION_MAX_LENGTH
                        rows=4
                        disabled=vm.inputs_locked()
                        error=vm.field_error(ProductField::Description)
                        on_input=Callback::new(move |v| vm.set_description(v))
                        on_blur=Callback::new(move |_| vm.touch(ProductField::Description))
                    />

                    <Input
                        id=ProductField::Price.key().to_string()
                        label=ProductField::Price.label().to_string()
                        input_type="number"
                        step="0.01"
                        value=vm.price_text
                        placeholder="0.00"
                        error=vm.field_error(ProductField::Price)
                        required=rules_for(ProductField::Price).is_required()
                        disabled=vm.inputs_locked()
                        on_input=Callback::new(move |v| vm.set_price(v))
                        on_blur=Callback::new(move |_| vm.touch(ProductField::Price))
                    />

                    <Checkbox
                        id=ProductField::Active.key().to_string()
                        label=ProductField::Active.label().to_string()
                        checked=vm.active()
                        captions=("Visible en la tienda", "Oculto")
                        on_change=Callback::new(move |v| vm.set_active(v))
                    />

                    <FileInput
                        id="foto".to_string()
                        label="Foto".to_string()
                        accept="image/*"
                        required=true
                        preview=vm.preview()
                        on_change=Callback::new(move |ev| vm.select_image(ev))
                    />

                    <div class="details-actions">
                        <Button
                            button_type="submit"
                            busy=vm.is_submitting()
                            busy_label="Guardando..."
                        >
                            {icon("save")}
                            {"Guardar"}
                        </Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| vm.cancel_command())
                        >
                            {icon("cancel")}
                            {"Cancelar"}
                        </Button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
