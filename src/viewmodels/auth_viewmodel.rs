// ============================================================================
// AUTH VIEWMODEL - Proveedor único del contexto de autenticación
// ============================================================================
// Escucha al backend de identidad (restore / sign-in / sign-up / sign-out) y
// recalcula el snapshot inmutable {user, is_admin, loading}.
// ============================================================================

use crate::error::{AppError, AppResult};
use crate::models::{AuthSession, AuthSnapshot};
use crate::services::{IdentityBackend, SessionStore};
use crate::state::AuthState;
use crate::utils::password::PasswordCriteria;

/// Resultado del registro
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn,
    /// El proyecto exige confirmar el email antes del primer login
    ConfirmationPending,
}

#[derive(Clone)]
pub struct AuthViewModel<B, S> {
    state: AuthState,
    backend: B,
    store: S,
}

impl<B: IdentityBackend, S: SessionStore> AuthViewModel<B, S> {
    pub fn new(state: AuthState, backend: B, store: S) -> Self {
        Self { state, backend, store }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Restaurar la sesión guardada al arrancar la app
    pub async fn restore(&self) {
        let Some(session) = self.store.load() else {
            log::info!("🔓 [AUTH] Sin sesión guardada");
            self.state.publish(AuthSnapshot::signed_out());
            return;
        };

        match self.backend.current_user(&session.access_token).await {
            Ok(user) => {
                let session = AuthSession { user, ..session };
                self.publish_session(&session).await;
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Sesión guardada inválida: {}", e);
                self.forget_session();
                self.state.publish(AuthSnapshot::signed_out());
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<()> {
        let session = self.backend.sign_in_with_password(email.trim(), password).await?;
        if let Err(e) = self.store.save(&session) {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
        }
        log::info!("✅ [AUTH] Sesión iniciada: {}", session.user.id);
        self.publish_session(&session).await;
        Ok(())
    }

    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> AppResult<SignUpOutcome> {
        match self.backend.sign_up(email.trim(), password, full_name.trim()).await? {
            Some(session) => {
                if let Err(e) = self.store.save(&session) {
                    log::error!("❌ [AUTH] Error guardando sesión: {}", e);
                }
                log::info!("✅ [AUTH] Cuenta creada: {}", session.user.id);
                self.publish_session(&session).await;
                Ok(SignUpOutcome::SignedIn)
            }
            None => {
                log::info!("📧 [AUTH] Cuenta creada, confirmación de email pendiente");
                Ok(SignUpOutcome::ConfirmationPending)
            }
        }
    }

    /// Cierra sesión localmente aunque el backend falle
    pub async fn sign_out(&self) {
        if let Some(session) = self.store.load() {
            if let Err(e) = self.backend.sign_out(&session.access_token).await {
                log::warn!("⚠️ [AUTH] Logout remoto falló: {}", e);
            }
        }
        self.forget_session();
        log::info!("👋 [AUTH] Sesión cerrada");
        self.state.publish(AuthSnapshot::signed_out());
    }

    /// Fallo del lookup de rol = no admin
    async fn publish_session(&self, session: &AuthSession) {
        let is_admin = match self.backend.is_admin(&session.access_token, &session.user.id).await {
            Ok(is_admin) => is_admin,
            Err(e) => {
                log::warn!("⚠️ [AUTH] No se pudo verificar rol admin: {}", e);
                false
            }
        };
        self.state.publish(AuthSnapshot::signed_in(session.user.clone(), is_admin));
    }

    fn forget_session(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ [AUTH] Error limpiando sesión: {}", e);
        }
    }
}

/// Validación local del formulario antes de llamar al backend
pub fn validate_credentials(email: &str, password: &str, full_name: Option<&str>) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() || full_name.is_some_and(|n| n.trim().is_empty()) {
        return Err("Preencha todos os campos");
    }
    if full_name.is_some() && !PasswordCriteria::of(password).min_length {
        return Err("A senha deve ter pelo menos 8 caracteres");
    }
    Ok(())
}

/// Mensaje para el usuario a partir de un error de auth
pub fn auth_error_message(error: &AppError) -> String {
    match error {
        AppError::Http { status: 400, message } if message.contains("already registered") => {
            "Este e-mail já está cadastrado".to_string()
        }
        AppError::Http { status: 400, .. } | AppError::NotAuthenticated => "E-mail ou senha inválidos".to_string(),
        AppError::Http { status: 422, .. } => "Dados inválidos, verifique o e-mail e a senha".to_string(),
        AppError::Network(_) => "Sem conexão com o servidor".to_string(),
        other => format!("Erro: {}", other),
    }
}
