use super::aggregate::{ProductField, ProductForm, ValidProduct};
use crate::shared::metadata::ValidationRules;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;
pub const PRICE_MIN: f64 = 0.01;
pub const PRICE_MAX: f64 = 5000.0;

/// Field → rules table for the product creation form
pub const PRODUCT_FIELD_RULES: [(ProductField, ValidationRules); 5] = [
    (ProductField::CategoryId, ValidationRules::required()),
    (
        ProductField::Name,
        ValidationRules::required()
            .min_length(NAME_MIN_LENGTH)
            .max_length(NAME_MAX_LENGTH),
    ),
    (
        ProductField::Description,
        ValidationRules::none().max_length(DESCRIPTION_MAX_LENGTH),
    ),
    (
        ProductField::Price,
        ValidationRules::required().range(PRICE_MIN, PRICE_MAX),
    ),
    (ProductField::Active, ValidationRules::required()),
];

pub fn rules_for(field: ProductField) -> ValidationRules {
    PRODUCT_FIELD_RULES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, rules)| *rules)
        .unwrap_or_default()
}

/// First failing rule of a single field
pub fn field_error(form: &ProductForm, field: ProductField) -> Option<String> {
    let rules = rules_for(field);
    let result = match field {
        ProductField::CategoryId => rules.validate_presence(form.category_id.is_some()),
        ProductField::Name => rules.validate_text(Some(form.name.as_str())),
        ProductField::Description => rules.validate_text(form.description.as_deref()),
        ProductField::Price => rules.validate_number(form.price),
        ProductField::Active => rules.validate_presence(form.active.is_some()),
    };
    result.err()
}

/// Evaluate the whole table; errors come back in field order
pub fn validate(form: &ProductForm) -> Result<ValidProduct, Vec<(ProductField, String)>> {
    let errors: Vec<_> = ProductField::ALL
        .iter()
        .filter_map(|&field| field_error(form, field).map(|e| (field, e)))
        .collect();

    match (form.category_id, form.price, form.active) {
        (Some(category_id), Some(price), Some(active)) if errors.is_empty() => Ok(ValidProduct {
            category_id,
            name: form.name.clone(),
            description: form.description.clone(),
            price,
            active,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            category_id: Some(2),
            name: "Café molido".to_string(),
            description: Some("Bolsa de 500 g".to_string()),
            price: Some(12.5),
            active: Some(true),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let product = validate(&valid_form()).unwrap();
        assert_eq!(product.category_id, 2);
        assert_eq!(product.price, 12.5);
        assert!(product.active);
    }

    #[test]
    fn test_default_form_reports_required_fields() {
        let errors = validate(&ProductForm::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![ProductField::CategoryId, ProductField::Name, ProductField::Price]
        );
    }

    #[test]
    fn test_name_bounds() {
        let mut form = valid_form();
        form.name = "A".to_string();
        assert!(field_error(&form, ProductField::Name).is_some());
        form.name = "AB".to_string();
        assert!(field_error(&form, ProductField::Name).is_none());
        form.name = "x".repeat(NAME_MAX_LENGTH);
        assert!(field_error(&form, ProductField::Name).is_none());
        form.name.push('x');
        assert!(field_error(&form, ProductField::Name).is_some());
    }

    #[test]
    fn test_name_length_uses_utf16_units() {
        let mut form = valid_form();
        form.name = "😀".to_string();
        assert_eq!(field_error(&form, ProductField::Name), None);

        form.name = "😀".repeat(127);
        assert_eq!(field_error(&form, ProductField::Name), None);

        form.name = "😀".repeat(128);
        assert_eq!(
            field_error(&form, ProductField::Name),
            Some(format!("Máximo {} caracteres", NAME_MAX_LENGTH))
        );
    }

    #[test]
    fn test_description_optional() {
        let mut form = valid_form();
        form.description = None;
        assert!(validate(&form).is_ok());
        form.description = Some("d".repeat(DESCRIPTION_MAX_LENGTH + 1));
        assert_eq!(
            field_error(&form, ProductField::Description),
            Some("Máximo 1000 caracteres".to_string())
        );
    }

    #[test]
    fn test_price_bounds() {
        let mut form = valid_form();
        for bad in [0.0, 0.009, -1.0, 5000.01] {
            form.price = Some(bad);
            assert!(validate(&form).is_err(), "price {bad} should fail");
        }
        for good in [PRICE_MIN, 1.0, PRICE_MAX] {
            form.price = Some(good);
            assert!(validate(&form).is_ok(), "price {good} should pass");
        }
    }

    #[test]
    fn test_inactive_is_still_present() {
        let mut form = valid_form();
        form.active = Some(false);
        assert!(!validate(&form).unwrap().active);
        form.active = None;
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_table_covers_every_field() {
        for field in ProductField::ALL {
            assert!(PRODUCT_FIELD_RULES.iter().any(|(f, _)| *f == field));
        }
        assert!(!rules_for(ProductField::Description).is_required());
    }

    #[test]
    fn test_required_markers() {
        for field in [ProductField::CategoryId, ProductField::Name, ProductField::Price] {
            assert!(rules_for(field).is_required(), "{:?} should be required", field);
        }
    }
}
