use contracts::domain::a001_category::aggregate::{parse_category_list, Category};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ApiError};
use crate::shared::config::ApiConfig;

/// Fetch all categories; `None` when the service answers `null`
pub async fn fetch_categories(config: &ApiConfig) -> Result<Option<Vec<Category>>, ApiError> {
    let response = Request::get(&api_url(config, &config.categories_path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(status, &text));
    }

    parse_category_list(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
