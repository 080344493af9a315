//! Validation rules for form fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a text value.
    ///
    /// Only an absent or empty value counts as missing; whitespace passes
    /// `required`. Length limits are skipped for empty values and count
    /// UTF-16 code units, the same unit as the browser `maxlength`.
    pub fn validate_text(&self, value: Option<&str>) -> Result<(), String> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return self.validate_presence(false),
        };

        let len = value.encode_utf16().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Mínimo {} caracteres", min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("Máximo {} caracteres", max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules (inclusive)
    pub fn validate_number(&self, value: Option<f64>) -> Result<(), String> {
        let value = match value {
            Some(v) => v,
            None => return self.validate_presence(false),
        };

        if value.is_nan() {
            return Err("Valor numérico inválido".to_string());
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("Valor mínimo {}", min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("Valor máximo {}", max));
            }
        }

        Ok(())
    }

    pub fn validate_presence(&self, present: bool) -> Result<(), String> {
        if self.required && !present {
            return Err("Campo obligatorio".to_string());
        }
        Ok(())
    }
}
