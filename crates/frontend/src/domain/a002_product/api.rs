use contracts::domain::a002_product::payload::{ProductPayload, PART_PHOTO};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, ApiError};
use crate::shared::config::ApiConfig;

/// Encode the payload as `multipart/form-data`.
/// The browser sets the boundary header itself.
pub fn to_form_data(payload: &ProductPayload<File>) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    for (name, value) in payload.text_parts() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    }
    form_data
        .append_with_blob_and_filename(PART_PHOTO, &payload.photo, &payload.photo.name())
        .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    Ok(form_data)
}

/// Create product
pub async fn create_product(
    config: &ApiConfig,
    payload: &ProductPayload<File>,
) -> Result<(), ApiError> {
    let form_data = to_form_data(payload)?;

    let response = Request::post(&api_url(config, &config.products_path))
        .header("Accept", "application/json")
        .body(form_data)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }

    Ok(())
}
