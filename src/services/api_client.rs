// ============================================================================
// SUPABASE CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Auth (/auth/v1), PostgREST (/rest/v1) y Edge Functions (/functions/v1).
// NO tiene lógica de negocio: los fallos se devuelven como AppError.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use crate::config::{AppConfig, CONFIG};
use crate::error::{AppError, AppResult};
use crate::models::{AuthSession, AuthUser, PatientLink, ProfileId, TokenResponse, UserMetadata};
use crate::models::auth::{PasswordGrantRequest, SignUpRequest};
use crate::services::backend::{FunctionInvoker, IdentityBackend, PatientDirectory, ProfileStore};
use crate::utils::{load_from_storage, ADMIN_ROLE, STORAGE_KEY_AUTH_SESSION};

#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    /// `path` relativo a la URL del proyecto (`auth/v1/...`, `rest/v1/...`, `functions/v1/...`)
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Token de la sesión guardada, o la anon key si no hay sesión
    fn bearer(&self) -> String {
        load_from_storage::<AuthSession>(STORAGE_KEY_AUTH_SESSION)
            .map(|session| session.access_token)
            .unwrap_or_else(|| self.anon_key.clone())
    }

    fn authorize(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", token))
    }

    /// Convierte respuestas no-2xx en AppError::Http con el body como mensaje
    async fn ensure_ok(response: Response) -> AppResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await
            .ok()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| response.status_text());
        Err(AppError::Http { status, message })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let response = Self::ensure_ok(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn rpc<T: DeserializeOwned>(&self, function: &str, token: &str, args: &Value) -> AppResult<T> {
        let url = self.url(&format!("rest/v1/rpc/{}", function));
        let response = self.authorize(Request::post(&url), token)
            .json(args)?
            .send()
            .await?;
        Self::read_json(response).await
    }
}

impl Default for SupabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl FunctionInvoker for SupabaseClient {
    async fn invoke(&self, function: &str, body: &Value) -> AppResult<Value> {
        let url = self.url(&format!("functions/v1/{}", function));
        log::debug!("⚡ [SUPABASE] Invocando función {}", function);

        let response = self.authorize(Request::post(&url), &self.bearer())
            .json(body)?
            .send()
            .await?;
        let response = Self::ensure_ok(response).await?;

        // Algunas funciones responden 204 / body vacío
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl ProfileStore for SupabaseClient {
    async fn profile_ids(&self, limit: u32) -> AppResult<Vec<ProfileId>> {
        let url = self.url(&format!("rest/v1/profiles?select=id&limit={}", limit));
        let response = self.authorize(Request::get(&url), &self.bearer())
            .send()
            .await?;
        Self::read_json(response).await
    }
}

#[async_trait(?Send)]
impl PatientDirectory for SupabaseClient {
    async fn linked_patients(&self, guardian_id: &str) -> AppResult<Vec<PatientLink>> {
        log::info!("👪 [SUPABASE] Obteniendo pacientes del responsable {}", guardian_id);
        self.rpc("get_guardian_patients", &self.bearer(), &json!({ "_guardian_id": guardian_id }))
            .await
    }
}

#[async_trait(?Send)]
impl IdentityBackend for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let url = self.url("auth/v1/token?grant_type=password");
        let request = PasswordGrantRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [SUPABASE] Iniciando sesión: {}", email);

        let response = self.authorize(Request::post(&url), &self.anon_key)
            .json(&request)?
            .send()
            .await?;
        let token: TokenResponse = Self::read_json(response).await?;

        match (token.access_token, token.user) {
            (Some(access_token), Some(user)) => Ok(AuthSession {
                access_token,
                refresh_token: token.refresh_token,
                user,
            }),
            _ => Err(AppError::NotAuthenticated),
        }
    }

    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> AppResult<Option<AuthSession>> {
        let url = self.url("auth/v1/signup");
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            data: UserMetadata { full_name: Some(full_name.to_string()) },
        };

        log::info!("📝 [SUPABASE] Creando cuenta: {}", email);

        let response = self.authorize(Request::post(&url), &self.anon_key)
            .json(&request)?
            .send()
            .await?;
        let token: TokenResponse = Self::read_json(response).await?;

        Ok(match (token.access_token, token.user) {
            (Some(access_token), Some(user)) => Some(AuthSession {
                access_token,
                refresh_token: token.refresh_token,
                user,
            }),
            _ => None,
        })
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let url = self.url("auth/v1/logout");
        let response = self.authorize(Request::post(&url), access_token)
            .send()
            .await?;
        Self::ensure_ok(response).await.map(|_| ())
    }

    async fn current_user(&self, access_token: &str) -> AppResult<AuthUser> {
        let url = self.url("auth/v1/user");
        let response = self.authorize(Request::get(&url), access_token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn is_admin(&self, access_token: &str, user_id: &str) -> AppResult<bool> {
        self.rpc(
            "has_role",
            access_token,
            &json!({ "_user_id": user_id, "_role": ADMIN_ROLE }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let client = SupabaseClient::with_config(&AppConfig {
            supabase_url: "https://abc.supabase.co/".to_string(),
            ..AppConfig::default()
        });
        assert_eq!(client.url("/rest/v1/profiles"), "https://abc.supabase.co/rest/v1/profiles");
        assert_eq!(
            client.url("functions/v1/notify-guardians"),
            "https://abc.supabase.co/functions/v1/notify-guardians"
        );
    }
}
