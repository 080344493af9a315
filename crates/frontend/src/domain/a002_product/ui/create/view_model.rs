//! Product Create - ViewModel
//!
//! Owns the state signal and the controller; exposes commands for the view
//! and derived signals for rendering.

use super::controller::{ProductCreateController, ProductCreateDeps};
use super::model::{
    FileReaderImageReader, HttpCategorySource, HttpProductSink, RouterNavigator, TimerDelay,
};
use super::state::ProductCreateState;
use crate::shared::config::AppConfig;
use contracts::domain::a002_product::aggregate::{ProductField, ProductForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

pub type ProductCreateStore = RwSignal<ProductCreateState<File>, LocalStorage>;
type Controller = ProductCreateController<File, ProductCreateStore>;

#[derive(Clone, Copy)]
pub struct ProductCreateViewModel {
    pub state: ProductCreateStore,
    /// Raw text of the price input, parsed into the form on every change
    pub price_text: RwSignal<String>,
    controller: StoredValue<Controller, LocalStorage>,
}

impl ProductCreateViewModel {
    pub fn new(config: &AppConfig, navigate: impl Fn(&str) + 'static) -> Self {
        let state = RwSignal::new_local(ProductCreateState::default());
        let deps = ProductCreateDeps {
            categories: Rc::new(HttpCategorySource {
                api: config.api.clone(),
            }),
            products: Rc::new(HttpProductSink {
                api: config.api.clone(),
            }),
            images: Rc::new(FileReaderImageReader),
            delay: Rc::new(TimerDelay),
            navigator: Rc::new(RouterNavigator::new(navigate)),
        };
        let controller = ProductCreateController::new(state, deps, config.product_create.clone());

        Self {
            state,
            price_text: RwSignal::new(String::new()),
            controller: StoredValue::new_local(controller),
        }
    }

    fn controller(&self) -> Option<Controller> {
        self.controller.try_get_value()
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn load_categories(&self) {
        if let Some(c) = self.controller() {
            spawn_local(async move { c.load_categories().await });
        }
    }

    pub fn set_category(&self, raw: String) {
        self.edit(|f| f.category_id = ProductForm::parse_category(&raw));
    }

    pub fn set_name(&self, value: String) {
        self.edit(|f| f.name = value);
    }

    pub fn set_description(&self, value: String) {
        self.edit(|f| f.description = Some(value));
    }

    pub fn set_price(&self, raw: String) {
        self.edit(|f| f.price = ProductForm::parse_price(&raw));
        self.price_text.set(raw);
    }

    pub fn set_active(&self, value: bool) {
        self.edit(|f| f.active = Some(value));
    }

    pub fn touch(&self, field: ProductField) {
        if let Some(c) = self.controller() {
            c.touch(field);
        }
    }

    /// Handler for the file input's `change` event
    pub fn select_image(&self, ev: web_sys::Event) {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(c) = self.controller() {
            spawn_local(c.on_image_selected(file));
        }
    }

    pub fn submit_command(&self) {
        if let Some(c) = self.controller() {
            spawn_local(async move { c.submit().await });
        }
    }

    pub fn cancel_command(&self) {
        if let Some(c) = self.controller() {
            c.cancel();
        }
    }

    fn edit(&self, edit: impl FnOnce(&mut ProductForm)) {
        if let Some(c) = self.controller() {
            c.edit(edit);
        }
    }

    // ------------------------------------------------------------------
    // Derived signals
    // ------------------------------------------------------------------

    pub fn field_error(&self, field: ProductField) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible_field_error(field)))
    }

    pub fn category_value(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.form.category_id.map(|id| id.to_string()).unwrap_or_default())
        })
    }

    pub fn category_options(&self) -> Signal<Vec<(String, String)>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.category_options()))
    }

    pub fn category_placeholder(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            if state.with(|s| s.loading_categories) {
                "Cargando categorías...".to_string()
            } else {
                "Selecciona una categoría".to_string()
            }
        })
    }

    pub fn name(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.form.name.clone()))
    }

    pub fn description(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.form.description.clone().unwrap_or_default()))
    }

    pub fn active(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.form.active.unwrap_or(false)))
    }

    pub fn preview(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.image.preview().map(str::to_string)))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submitting()))
    }

    pub fn inputs_locked(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.inputs_locked()))
    }

    pub fn category_locked(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.category_locked()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error_message().map(str::to_string)))
    }

    pub fn success(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.success_message().map(str::to_string)))
    }
}
