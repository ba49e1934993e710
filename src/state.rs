//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{PriceService, UserService};
use crate::infrastructure::persistence::{InMemoryPriceRepository, InMemoryUserRepository};

/// Services reachable from every handler.
///
/// Repositories are owned by the services; cloning the state only clones the
/// `Arc`s, so all requests see the same user store.
#[derive(Clone)]
pub struct AppState {
    pub price_service: Arc<PriceService<InMemoryPriceRepository>>,
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl AppState {
    pub fn new(
        price_repository: Arc<InMemoryPriceRepository>,
        user_repository: Arc<InMemoryUserRepository>,
    ) -> Self {
        Self {
            price_service: Arc::new(PriceService::new(price_repository)),
            user_service: Arc::new(UserService::new(user_repository)),
        }
    }

    /// State backed by the sample price catalogue and an empty user store.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPriceRepository::with_sample_data()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}
