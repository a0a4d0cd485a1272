use serde::{Deserialize, Serialize};

/// Usuario autenticado (proyección de `auth.users` de Supabase)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

impl AuthUser {
    /// Nombre para mostrar: nombre completo, si no el email, si no el id
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Sesión persistida en localStorage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Clone, Debug, Serialize)]
pub struct PasswordGrantRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: UserMetadata,
}

/// Respuesta de `/auth/v1/token` y `/auth/v1/signup`.
/// Con confirmación de email activada, signup devuelve solo el usuario (sin token).
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Snapshot inmutable del estado de autenticación
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<AuthUser>,
    pub is_admin: bool,
    pub loading: bool,
}

impl AuthSnapshot {
    /// Estado inicial: cargando, sin decisión posible
    pub fn loading() -> Self {
        Self { user: None, is_admin: false, loading: true }
    }

    pub fn signed_out() -> Self {
        Self { user: None, is_admin: false, loading: false }
    }

    pub fn signed_in(user: AuthUser, is_admin: bool) -> Self {
        Self { user: Some(user), is_admin, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_supabase_shape() {
        let json = r#"{"id":"u-1","email":"ana@example.com","aud":"authenticated",
            "user_metadata":{"full_name":"Ana Souza"}}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Ana Souza");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user: AuthUser = serde_json::from_str(r#"{"id":"u-2","email":"joao@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "joao@example.com");
    }

    #[test]
    fn default_snapshot_is_loading() {
        let snapshot = AuthSnapshot::default();
        assert!(snapshot.loading);
        assert!(!snapshot.is_authenticated());
    }
}
