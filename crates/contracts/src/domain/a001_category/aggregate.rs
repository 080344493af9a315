use serde::{Deserialize, Serialize};

/// Категория товара, как её отдаёт сервис категорий
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    #[serde(rename = "nombre", alias = "name")]
    pub name: String,

    #[serde(default, rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    /// Value used by the `<select>` option
    pub fn option_value(&self) -> String {
        self.id.to_string()
    }

    /// Label shown in the selector
    pub fn label(&self) -> &str {
        &self.name
    }
}

/// The category service may answer with `null` instead of an array.
pub fn parse_category_list(json: &str) -> Result<Option<Vec<Category>>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_shape() {
        let list = parse_category_list(r#"[{"id":3,"nombre":"Bebidas"},{"id":7,"nombre":"Snacks","descripcion":"Dulces"}]"#)
            .unwrap()
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].label(), "Bebidas");
        assert_eq!(list[1].option_value(), "7");
        assert_eq!(list[1].description.as_deref(), Some("Dulces"));
    }

    #[test]
    fn test_null_body() {
        assert_eq!(parse_category_list("null").unwrap(), None);
        assert_eq!(parse_category_list("[]").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_english_alias() {
        let list = parse_category_list(r#"[{"id":1,"name":"Tools"}]"#)
            .unwrap()
            .unwrap();
        assert_eq!(list[0].name, "Tools");
    }

    #[test]
    fn test_invalid_body() {
        assert!(parse_category_list("<html>").is_err());
    }
}
