//! Application state shared by the recruit handlers.
//!
//! `AppState` is built once in `main.rs` and injected into the Actix
//! application as `web::Data`. It is cheap to clone: the store is only a
//! database path and the secret a short string.

use crate::error::AppError;
use crate::store::ApplicationStore;
use log::warn;

#[derive(Clone)]
pub struct AppState {
    /// Where applications are persisted.
    pub store: ApplicationStore,

    /// Shared secret the admin view must present as `?admin=`.
    ///
    /// `None` disables the admin endpoints entirely.
    pub admin_secret: Option<String>,
}

impl AppState {
    pub fn new(store: ApplicationStore, admin_secret: Option<String>) -> Self {
        Self {
            store,
            admin_secret,
        }
    }

    /// Checks the key supplied by the admin view against the configured secret.
    pub fn authorize(&self, provided: Option<&str>) -> Result<(), AppError> {
        match (&self.admin_secret, provided) {
            (Some(secret), Some(key)) if secret == key => Ok(()),
            _ => {
                warn!("rejected admin request");
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_requires_matching_secret() {
        let state = AppState::new(ApplicationStore::new("unused.sqlite"), Some("hops".into()));
        assert!(state.authorize(Some("hops")).is_ok());
        assert!(matches!(state.authorize(Some("malt")), Err(AppError::Unauthorized)));
        assert!(matches!(state.authorize(None), Err(AppError::Unauthorized)));
    }

    #[test]
    fn unset_secret_rejects_everything() {
        let state = AppState::new(ApplicationStore::new("unused.sqlite"), None);
        assert!(state.authorize(Some("")).is_err());
        assert!(state.authorize(None).is_err());
    }
}
