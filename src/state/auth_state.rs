// ============================================================================
// AUTH STATE - Contexto de autenticación (solo lectura para los consumidores)
// ============================================================================

use crate::models::AuthSnapshot;
use crate::state::Observable;

/// Contexto compartido. Solo `AuthViewModel` publica snapshots nuevos.
#[derive(Clone)]
pub struct AuthState {
    snapshot: Observable<AuthSnapshot>,
}

impl AuthState {
    /// Arranca en `loading`
    pub fn new() -> Self {
        Self {
            snapshot: Observable::new(AuthSnapshot::loading()),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.snapshot.get()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.with(|s| s.loading)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.snapshot.subscribe(callback);
    }

    /// Reemplazar el snapshot completo (nunca se muta parcialmente)
    pub(crate) fn publish(&self, snapshot: AuthSnapshot) {
        if self.snapshot.with(|current| *current == snapshot) {
            return;
        }
        log::debug!(
            "🔑 [AUTH] snapshot: user={:?} admin={} loading={}",
            snapshot.user.as_ref().map(|u| u.id.as_str()),
            snapshot.is_admin,
            snapshot.loading
        );
        self.snapshot.set(snapshot);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
