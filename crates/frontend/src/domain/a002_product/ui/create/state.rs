//! Product Create - screen state
//!
//! `ProductCreateState` is an immutable snapshot; every transition consumes
//! the current value and returns the next one.

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::{ProductField, ProductForm};
use contracts::domain::a002_product::payload::ProductPayload;
use contracts::domain::a002_product::rules;
use std::collections::BTreeSet;

pub const MSG_CATEGORIES_FAILED: &str = "No se pudieron cargar las categorías";
pub const MSG_INVALID_FORM: &str = "Por favor, completa correctamente los campos obligatorios.";
pub const MSG_MISSING_PHOTO: &str = "Debes seleccionar una foto para el producto.";
pub const MSG_CREATED: &str = "Producto creado correctamente";
pub const MSG_CONNECTION_FAILED: &str = "Error al conectar con el servidor";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

/// Why `begin_submit` refused to build a payload
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejection {
    InvalidFields(Vec<(ProductField, String)>),
    MissingPhoto,
}

/// Chosen file and its data-URL preview.
///
/// `revision` grows with every selection so a late read of an older file
/// cannot overwrite the preview of the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage<F> {
    file: Option<F>,
    preview: Option<String>,
    revision: u64,
}

impl<F> Default for SelectedImage<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            revision: 0,
        }
    }
}

impl<F> SelectedImage<F> {
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreateState<F> {
    pub form: ProductForm,
    pub touched: BTreeSet<ProductField>,
    pub categories: Vec<Category>,
    pub loading_categories: bool,
    pub image: SelectedImage<F>,
    pub outcome: SubmissionOutcome,
}

impl<F> Default for ProductCreateState<F> {
    fn default() -> Self {
        Self {
            form: ProductForm::default(),
            touched: BTreeSet::new(),
            categories: Vec::new(),
            loading_categories: false,
            image: SelectedImage::default(),
            outcome: SubmissionOutcome::Idle,
        }
    }
}

impl<F: Clone> ProductCreateState<F> {
    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub fn categories_requested(self) -> Self {
        Self {
            loading_categories: true,
            ..self
        }
    }

    pub fn categories_loaded(self, categories: Option<Vec<Category>>) -> Self {
        Self {
            categories: categories.unwrap_or_default(),
            loading_categories: false,
            ..self
        }
    }

    /// Keeps whatever list was loaded before
    pub fn categories_failed(self) -> Self {
        Self {
            loading_categories: false,
            outcome: SubmissionOutcome::Failed(MSG_CATEGORIES_FAILED.to_string()),
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Form editing
    // ------------------------------------------------------------------

    pub fn with_form(mut self, edit: impl FnOnce(&mut ProductForm)) -> Self {
        edit(&mut self.form);
        self
    }

    pub fn touched_field(mut self, field: ProductField) -> Self {
        self.touched.insert(field);
        self
    }

    pub fn all_touched(self) -> Self {
        Self {
            touched: ProductField::ALL.into_iter().collect(),
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Image
    // ------------------------------------------------------------------

    /// `None` models the user clearing the file input
    pub fn image_selected(self, file: Option<F>) -> Self {
        Self {
            image: SelectedImage {
                file,
                preview: None,
                revision: self.image.revision + 1,
            },
            ..self
        }
    }

    /// Applies the preview only if it belongs to the current selection
    pub fn preview_loaded(self, revision: u64, data_url: String) -> Self {
        if revision != self.image.revision || self.image.file.is_none() {
            return self;
        }
        Self {
            image: SelectedImage {
                preview: Some(data_url),
                ..self.image
            },
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Validating step of the submit state machine.
    ///
    /// Clears previous messages, marks every field touched, then either
    /// rejects (error message set, no payload) or moves to in-flight and
    /// hands back the multipart payload.
    pub fn begin_submit(self) -> (Self, Result<ProductPayload<F>, SubmitRejection>) {
        let state = Self {
            outcome: SubmissionOutcome::Idle,
            ..self
        }
        .all_touched();

        let product = match rules::validate(&state.form) {
            Ok(product) => product,
            Err(errors) => {
                let state = state.failed(MSG_INVALID_FORM.to_string());
                return (state, Err(SubmitRejection::InvalidFields(errors)));
            }
        };

        let photo = match state.image.file.clone() {
            Some(file) => file,
            None => {
                let state = state.failed(MSG_MISSING_PHOTO.to_string());
                return (state, Err(SubmitRejection::MissingPhoto));
            }
        };

        let payload = ProductPayload::new(&product, photo);
        let state = Self {
            outcome: SubmissionOutcome::InFlight,
            ..state
        };
        (state, Ok(payload))
    }

    pub fn submit_succeeded(self) -> Self {
        Self {
            outcome: SubmissionOutcome::Succeeded(MSG_CREATED.to_string()),
            ..self
        }
    }

    /// `server_message` wins over the generic connectivity message
    pub fn submit_failed(self, server_message: Option<String>) -> Self {
        self.failed(server_message.unwrap_or_else(|| MSG_CONNECTION_FAILED.to_string()))
    }

    fn failed(self, message: String) -> Self {
        Self {
            outcome: SubmissionOutcome::Failed(message),
            ..self
        }
    }
}

impl<F> ProductCreateState<F> {
    pub fn is_submitting(&self) -> bool {
        self.outcome == SubmissionOutcome::InFlight
    }

    /// Inputs are read-only while the create request is in flight
    pub fn inputs_locked(&self) -> bool {
        self.is_submitting()
    }

    /// The category selector also waits for its options
    pub fn category_locked(&self) -> bool {
        self.loading_categories || self.inputs_locked()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    /// Validation feedback, shown only once the field has been touched
    pub fn visible_field_error(&self, field: ProductField) -> Option<String> {
        if !self.touched.contains(&field) {
            return None;
        }
        rules::field_error(&self.form, field)
    }

    /// `(value, label)` pairs for the category selector
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .map(|c| (c.option_value(), c.label().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = ProductCreateState<&'static str>;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    fn filled() -> State {
        State::default().with_form(|f| {
            f.category_id = Some(1);
            f.name = "  Lámpara ".to_string();
            f.description = Some(" LED ".to_string());
            f.price = Some(25.0);
        })
    }

    #[test]
    fn test_categories_loaded_replaces_list() {
        let state = State::default()
            .categories_requested()
            .categories_loaded(Some(vec![category(1, "Hogar")]));
        assert!(!state.loading_categories);
        assert_eq!(state.category_options(), vec![("1".to_string(), "Hogar".to_string())]);

        let state = state.categories_loaded(None);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_categories_failed_keeps_list() {
        let state = State::default()
            .categories_loaded(Some(vec![category(1, "Hogar")]))
            .categories_requested()
            .categories_failed();
        assert!(!state.loading_categories);
        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.error_message(), Some(MSG_CATEGORIES_FAILED));
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let (state, result) = State::default().image_selected(Some("a.png")).begin_submit();
        assert!(matches!(result, Err(SubmitRejection::InvalidFields(_))));
        assert_eq!(state.error_message(), Some(MSG_INVALID_FORM));
        assert!(state.success_message().is_none());
        assert_eq!(state.touched.len(), ProductField::ALL.len());
    }

    #[test]
    fn test_missing_photo_is_rejected() {
        let (state, result) = filled().begin_submit();
        assert_eq!(result, Err(SubmitRejection::MissingPhoto));
        assert_eq!(state.error_message(), Some(MSG_MISSING_PHOTO));
    }

    #[test]
    fn test_valid_submit_goes_in_flight() {
        let (state, result) = filled().image_selected(Some("a.png")).begin_submit();
        let payload = result.unwrap();
        assert!(state.is_submitting());
        assert!(state.error_message().is_none());
        assert_eq!(payload.name, "Lámpara");
        assert_eq!(payload.description, "LED");
        assert_eq!(payload.photo, "a.png");
    }

    #[test]
    fn test_begin_submit_clears_previous_messages() {
        let state = filled().image_selected(Some("a.png")).submit_failed(None);
        assert_eq!(state.error_message(), Some(MSG_CONNECTION_FAILED));
        let (state, _) = state.begin_submit();
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_outcome_messages_are_exclusive() {
        let state = filled().submit_succeeded();
        assert_eq!(state.success_message(), Some(MSG_CREATED));
        assert!(state.error_message().is_none());

        let state = state.submit_failed(Some("Duplicado".to_string()));
        assert_eq!(state.error_message(), Some("Duplicado"));
        assert!(state.success_message().is_none());
    }

    #[test]
    fn test_clearing_image_drops_preview() {
        let state = State::default().image_selected(Some("a.png"));
        let revision = state.image.revision();
        let state = state.preview_loaded(revision, "data:image/png;base64,AA==".to_string());
        assert_eq!(state.image.preview(), Some("data:image/png;base64,AA=="));

        let state = state.image_selected(None);
        assert!(state.image.file().is_none());
        assert!(state.image.preview().is_none());
    }

    #[test]
    fn test_stale_preview_is_ignored() {
        let state = State::default().image_selected(Some("a.png"));
        let old = state.image.revision();
        let state = state.image_selected(Some("b.png"));
        let state = state.preview_loaded(old, "data:a".to_string());
        assert!(state.image.preview().is_none());
        assert_eq!(state.image.file(), Some(&"b.png"));
    }

    #[test]
    fn test_field_errors_hidden_until_touched() {
        let state = State::default();
        assert!(state.visible_field_error(ProductField::Name).is_none());
        let state = state.touched_field(ProductField::Name);
        assert_eq!(
            state.visible_field_error(ProductField::Name),
            Some("Campo obligatorio".to_string())
        );
    }

    #[test]
    fn test_inputs_locked_while_in_flight() {
        let state = filled().image_selected(Some("a.png"));
        assert!(!state.inputs_locked());

        let (state, _) = state.begin_submit();
        assert!(state.inputs_locked());
        assert!(state.category_locked());

        let state = state.submit_failed(None);
        assert!(!state.inputs_locked());
        assert!(!state.category_locked());
    }

    #[test]
    fn test_category_locked_while_loading() {
        let state = State::default().categories_requested();
        assert!(state.category_locked());
        assert!(!state.inputs_locked());
        assert!(!state.categories_loaded(None).category_locked());
    }
}
