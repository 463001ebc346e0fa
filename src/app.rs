// src/app.rs
use crate::ai::AiSearchGateway;
use crate::domain::Catalog;
use crate::session::SessionStore;
use url::Url;

/// Shared state handed to every request.
pub struct App {
    pub catalog: Catalog,
    pub sessions: SessionStore,
    pub gateway: AiSearchGateway,
    /// Base of share links.
    pub public_url: Url,
}

impl App {
    pub fn new(catalog: Catalog, gateway: AiSearchGateway, public_url: Url) -> Self {
        Self {
            catalog,
            sessions: SessionStore::default(),
            gateway,
            public_url,
        }
    }
}
