// ============================================================================
// SESSION STORE - Persistencia de la sesión de Supabase
// ============================================================================

use crate::error::AppResult;
use crate::models::AuthSession;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_AUTH_SESSION};

pub trait SessionStore {
    fn load(&self) -> Option<AuthSession>;
    fn save(&self, session: &AuthSession) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// localStorage (sobrevive a recargas, como el cliente JS de Supabase)
#[derive(Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<AuthSession> {
        load_from_storage(STORAGE_KEY_AUTH_SESSION)
    }

    fn save(&self, session: &AuthSession) -> AppResult<()> {
        save_to_storage(STORAGE_KEY_AUTH_SESSION, session)
    }

    fn clear(&self) -> AppResult<()> {
        remove_from_storage(STORAGE_KEY_AUTH_SESSION)
    }
}
