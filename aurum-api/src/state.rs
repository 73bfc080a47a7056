use std::sync::Arc;
use aurum_catalog::CatalogRepository;
use aurum_store::app_config::DEFAULT_FRONTEND_URL;
use aurum_store::ReferencePriceReader;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub reference_price: ReferencePriceReader,
    pub frontend_url: String,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, reference_price: ReferencePriceReader) -> Self {
        Self {
            catalog,
            reference_price,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
        }
    }

    pub fn with_frontend_url(mut self, frontend_url: impl Into<String>) -> Self {
        self.frontend_url = frontend_url.into();
        self
    }
}
