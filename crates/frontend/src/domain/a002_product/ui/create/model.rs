//! Product Create - Model Layer
//!
//! Browser implementations of the screen's collaborators.

use super::traits::{CategorySource, Delay, ImageReader, Navigator, ProductSink};
use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a002_product::api::create_product;
use crate::shared::api_utils::ApiError;
use crate::shared::config::ApiConfig;
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::payload::ProductPayload;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FileReader};

pub struct HttpCategorySource {
    pub api: ApiConfig,
}

#[async_trait(?Send)]
impl CategorySource for HttpCategorySource {
    async fn fetch_all(&self) -> Result<Option<Vec<Category>>, ApiError> {
        fetch_categories(&self.api).await
    }
}

pub struct HttpProductSink {
    pub api: ApiConfig,
}

#[async_trait(?Send)]
impl ProductSink<File> for HttpProductSink {
    async fn create_product(&self, payload: ProductPayload<File>) -> Result<(), ApiError> {
        create_product(&self.api, &payload).await
    }
}

/// `FileReader.readAsDataURL` wrapped in a promise
pub struct FileReaderImageReader;

#[async_trait(?Send)]
impl ImageReader<File> for FileReaderImageReader {
    async fn read_data_url(&self, file: File) -> Result<String, String> {
        let reader = FileReader::new().map_err(|e| format!("{e:?}"))?;

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let loaded = reader.clone();
            let onload = Closure::once_into_js(move || {
                let result = loaded.result().unwrap_or(JsValue::NULL);
                let _ = resolve.call1(&JsValue::NULL, &result);
            });
            let onerror = Closure::once_into_js(move || {
                let _ = reject.call0(&JsValue::NULL);
            });
            reader.set_onload(Some(onload.unchecked_ref()));
            reader.set_onerror(Some(onerror.unchecked_ref()));
        });

        reader
            .read_as_data_url(&file)
            .map_err(|e| format!("{e:?}"))?;

        let value = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|_| format!("could not read {}", file.name()))?;
        value
            .as_string()
            .ok_or_else(|| "reader result is not a string".to_string())
    }
}

pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Wraps the router's navigate function
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            navigate: Rc::new(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        (self.navigate)(path);
    }
}
