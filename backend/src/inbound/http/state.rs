//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountCommand, AccountQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub accounts_query: Arc<dyn AccountQuery>,
}

impl HttpState {
    /// Bundle the account ports.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use backend::domain::AccountService;
    /// # use backend::inbound::http::state::HttpState;
    /// # use backend::outbound::memory::InMemoryAccountRepository;
    /// # use mockable::DefaultClock;
    /// let service = Arc::new(AccountService::new(
    ///     Arc::new(InMemoryAccountRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(accounts: Arc<dyn AccountCommand>, accounts_query: Arc<dyn AccountQuery>) -> Self {
        Self {
            accounts,
            accounts_query,
        }
    }
}
