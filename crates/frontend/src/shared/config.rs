use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub product_create: ProductCreateConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full backend origin; when absent it is derived from the window location
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
    pub categories_path: String,
    pub products_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProductCreateConfig {
    /// Pause after a successful create so the message can be read
    pub redirect_delay_ms: u32,
    pub list_path: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
categories_path = "/api/categoria"
products_path = "/api/producto"

[product_create]
redirect_delay_ms = 1200
list_path = "/admin/mantenimiento/producto"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 3000,
                categories_path: "/api/categoria".to_string(),
                products_path: "/api/producto".to_string(),
            },
            product_create: ProductCreateConfig {
                redirect_delay_ms: 1200,
                list_path: "/admin/mantenimiento/producto".to_string(),
            },
        }
    }
}

/// Load configuration
///
/// A TOML document in the `APP_CONFIG` environment variable at build time
/// replaces the embedded default.
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    match option_env!("APP_CONFIG") {
        Some(raw) => {
            log::info!("Using APP_CONFIG supplied at build time");
            toml::from_str(raw)
        }
        None => toml::from_str(DEFAULT_CONFIG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.product_create.redirect_delay_ms, 1200);
    }

    #[test]
    fn test_base_url_override() {
        let config: AppConfig = toml::from_str(
            r#"
[api]
base_url = "https://tienda.example.com"
port = 443
categories_path = "/api/categoria"
products_path = "/api/producto"

[product_create]
redirect_delay_ms = 0
list_path = "/productos"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://tienda.example.com"));
        assert_eq!(config.product_create.list_path, "/productos");
    }

    #[test]
    fn test_missing_section_fails() {
        assert!(toml::from_str::<AppConfig>("[api]\nport = 1").is_err());
    }
}
