//! Multipart body of `POST /api/producto`

use super::aggregate::ValidProduct;

pub const PART_CATEGORY_ID: &str = "CategoriaId";
pub const PART_NAME: &str = "Nombre";
pub const PART_DESCRIPTION: &str = "Descripcion";
pub const PART_PRICE: &str = "Precio";
pub const PART_ACTIVE: &str = "Activo";
pub const PART_PHOTO: &str = "Foto";

/// Text parts are already stringified; `photo` is the platform file handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload<F> {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub active: String,
    pub photo: F,
}

impl<F> ProductPayload<F> {
    pub fn new(product: &ValidProduct, photo: F) -> Self {
        Self {
            category_id: product.category_id.to_string(),
            name: product.name.trim().to_string(),
            description: product
                .description
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            price: product.price.to_string(),
            active: product.active.to_string(),
            photo,
        }
    }

    /// Every part except the file, in wire order
    pub fn text_parts(&self) -> [(&'static str, &str); 5] {
        [
            (PART_CATEGORY_ID, self.category_id.as_str()),
            (PART_NAME, self.name.as_str()),
            (PART_DESCRIPTION, self.description.as_str()),
            (PART_PRICE, self.price.as_str()),
            (PART_ACTIVE, self.active.as_str()),
        ]
    }
}
