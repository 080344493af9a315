// ============================================================================
// Field identifiers
// ============================================================================

/// Поля формы создания товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    CategoryId,
    Name,
    Description,
    Price,
    Active,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::CategoryId,
        ProductField::Name,
        ProductField::Description,
        ProductField::Price,
        ProductField::Active,
    ];

    /// Form key, also used as the DOM id of the input
    pub const fn key(self) -> &'static str {
        match self {
            ProductField::CategoryId => "categoryId",
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Active => "active",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProductField::CategoryId => "Categoría",
            ProductField::Name => "Nombre",
            ProductField::Description => "Descripción",
            ProductField::Price => "Precio",
            ProductField::Active => "Activo",
        }
    }
}

// ============================================================================
// Form values
// ============================================================================

/// Current values of the product creation form.
///
/// Values are kept as entered; trimming happens when the multipart payload
/// is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub active: Option<bool>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            category_id: None,
            name: String::new(),
            description: Some(String::new()),
            price: None,
            active: Some(true),
        }
    }
}

impl ProductForm {
    /// Parse the `<select>` value; the placeholder option carries an empty value
    pub fn parse_category(raw: &str) -> Option<i64> {
        raw.trim().parse().ok()
    }

    /// Parse the number input; browsers report an empty string for
    /// unparseable input, so anything that is not a finite number is absent
    pub fn parse_price(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Form values that passed every rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = ProductForm::default();
        assert_eq!(form.active, Some(true));
        assert!(form.category_id.is_none());
        assert!(form.price.is_none());
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(ProductForm::parse_price("12.5"), Some(12.5));
        assert_eq!(ProductForm::parse_price(" 3 "), Some(3.0));
        assert_eq!(ProductForm::parse_price(""), None);
        assert_eq!(ProductForm::parse_price("abc"), None);
        assert_eq!(ProductForm::parse_price("inf"), None);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(ProductForm::parse_category("4"), Some(4));
        assert_eq!(ProductForm::parse_category(""), None);
    }

    #[test]
    fn test_field_keys_unique() {
        let mut keys: Vec<_> = ProductField::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ProductField::ALL.len());
    }
}
