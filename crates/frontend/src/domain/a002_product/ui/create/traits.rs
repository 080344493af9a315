//! Collaborators of the product creation screen.
//!
//! Browser implementations live in `model.rs`; tests provide in-memory ones.

use crate::shared::api_utils::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::payload::ProductPayload;

#[async_trait(?Send)]
pub trait CategorySource {
    /// `Ok(None)` when the service answered with `null`
    async fn fetch_all(&self) -> Result<Option<Vec<Category>>, ApiError>;
}

#[async_trait(?Send)]
pub trait ProductSink<F: 'static> {
    async fn create_product(&self, payload: ProductPayload<F>) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
pub trait ImageReader<F: 'static> {
    /// Read the file into a `data:` URL
    async fn read_data_url(&self, file: F) -> Result<String, String>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, millis: u32);
}

pub trait Navigator {
    fn navigate_to(&self, path: &str);
}
