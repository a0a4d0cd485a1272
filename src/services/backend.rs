// ============================================================================
// BACKEND - Contratos de los servicios remotos (Supabase)
// ============================================================================
// Los viewmodels dependen de estos traits, no del cliente HTTP concreto,
// para poder ejecutarse contra fakes en los tests.
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use crate::error::AppResult;
use crate::models::{AuthSession, AuthUser, PatientLink, ProfileId};

/// Invocación de edge functions
#[async_trait(?Send)]
pub trait FunctionInvoker {
    async fn invoke(&self, function: &str, body: &Value) -> AppResult<Value>;
}

/// Lectura de la colección `profiles`
#[async_trait(?Send)]
pub trait ProfileStore {
    async fn profile_ids(&self, limit: u32) -> AppResult<Vec<ProfileId>>;
}

/// Pacientes vinculados a un responsable
#[async_trait(?Send)]
pub trait PatientDirectory {
    async fn linked_patients(&self, guardian_id: &str) -> AppResult<Vec<PatientLink>>;
}

/// Proveedor de identidad (Supabase Auth + rol admin)
#[async_trait(?Send)]
pub trait IdentityBackend {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// `None` cuando el proyecto exige confirmar el email antes de iniciar sesión
    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> AppResult<Option<AuthSession>>;

    async fn sign_out(&self, access_token: &str) -> AppResult<()>;

    async fn current_user(&self, access_token: &str) -> AppResult<AuthUser>;

    async fn is_admin(&self, access_token: &str, user_id: &str) -> AppResult<bool>;
}
