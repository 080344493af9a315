//! Product Create - controller
//!
//! Drives `ProductCreateState` through its transitions and talks to the
//! collaborators. All async work runs on the UI thread and is never
//! cancelled: a continuation that outlives the view writes into a disposed
//! store, which drops the write.

use super::state::{ProductCreateState, SubmitRejection};
use super::traits::{CategorySource, Delay, ImageReader, Navigator, ProductSink};
use crate::shared::config::ProductCreateConfig;
use crate::shared::state::StateStore;
use contracts::domain::a002_product::aggregate::{ProductField, ProductForm};
use std::future::Future;
use std::rc::Rc;

pub struct ProductCreateDeps<F: 'static> {
    pub categories: Rc<dyn CategorySource>,
    pub products: Rc<dyn ProductSink<F>>,
    pub images: Rc<dyn ImageReader<F>>,
    pub delay: Rc<dyn Delay>,
    pub navigator: Rc<dyn Navigator>,
}

impl<F: 'static> Clone for ProductCreateDeps<F> {
    fn clone(&self) -> Self {
        Self {
            categories: self.categories.clone(),
            products: self.products.clone(),
            images: self.images.clone(),
            delay: self.delay.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

pub struct ProductCreateController<F: 'static, S> {
    store: S,
    deps: ProductCreateDeps<F>,
    settings: ProductCreateConfig,
}

impl<F: 'static, S: Clone> Clone for ProductCreateController<F, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            deps: self.deps.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<F, S> ProductCreateController<F, S>
where
    F: Clone + 'static,
    S: StateStore<ProductCreateState<F>> + Clone + 'static,
{
    pub fn new(store: S, deps: ProductCreateDeps<F>, settings: ProductCreateConfig) -> Self {
        Self {
            store,
            deps,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the category list for the selector. No retry on failure.
    pub async fn load_categories(&self) {
        log::debug!("Loading categories");
        self.store.transition(|s| s.categories_requested());

        match self.deps.categories.fetch_all().await {
            Ok(list) => {
                log::info!(
                    "Loaded {} categories",
                    list.as_ref().map(Vec::len).unwrap_or(0)
                );
                self.store.transition(|s| s.categories_loaded(list));
            }
            Err(e) => {
                log::error!("Failed to load categories: {}", e);
                self.store.transition(|s| s.categories_failed());
            }
        }
    }

    pub fn edit(&self, edit: impl FnOnce(&mut ProductForm)) {
        self.store.transition(|s| s.with_form(edit));
    }

    pub fn touch(&self, field: ProductField) {
        self.store.transition(|s| s.touched_field(field));
    }

    /// Store the file right away; the returned future reads the preview.
    ///
    /// A failed read only logs; the preview stays empty.
    pub fn on_image_selected(&self, file: Option<F>) -> impl Future<Output = ()> + 'static {
        self.store.transition(|s| s.image_selected(file.clone()));
        let revision = self.store.snapshot().map(|s| s.image.revision());
        let this = self.clone();

        async move {
            let (Some(file), Some(revision)) = (file, revision) else {
                return;
            };
            match this.deps.images.read_data_url(file).await {
                Ok(data_url) => this
                    .store
                    .transition(|s| s.preview_loaded(revision, data_url)),
                Err(e) => log::warn!("Could not read selected image: {}", e),
            }
        }
    }

    /// Validate, send the multipart payload and react to the outcome.
    ///
    /// On success the navigation to the listing is scheduled after
    /// `redirect_delay_ms` and cannot be cancelled.
    pub async fn submit(&self) {
        let Some(state) = self.store.snapshot() else {
            return;
        };
        let (next, result) = state.begin_submit();
        self.store.replace(next);

        let payload = match result {
            Ok(payload) => payload,
            Err(SubmitRejection::InvalidFields(errors)) => {
                log::warn!("Product form rejected: {} invalid field(s)", errors.len());
                return;
            }
            Err(SubmitRejection::MissingPhoto) => {
                log::warn!("Product form rejected: no photo selected");
                return;
            }
        };

        log::debug!("Creating product '{}'", payload.name);
        match self.deps.products.create_product(payload).await {
            Ok(()) => {
                log::info!("Product created");
                self.store.transition(|s| s.submit_succeeded());
                self.deps.delay.sleep(self.settings.redirect_delay_ms).await;
                self.deps.navigator.navigate_to(&self.settings.list_path);
            }
            Err(e) => {
                log::error!("Failed to create product: {}", e);
                let message = e.server_message().map(str::to_string);
                self.store.transition(|s| s.submit_failed(message));
            }
        }
    }

    /// Leave without confirmation; pending requests are not aborted
    pub fn cancel(&self) {
        self.deps.navigator.navigate_to(&self.settings.list_path);
    }
}
