// ============================================================================
// TEST SUPPORT - Fakes del backend y logger de captura (solo tests)
// ============================================================================

use std::cell::RefCell;
use std::sync::Once;
use async_trait::async_trait;
use log::{Level, Log, Metadata, Record};
use serde_json::Value;
use crate::error::{AppError, AppResult};
use crate::models::{AuthSession, AuthUser, PatientLink, ProfileId, UserMetadata};
use crate::services::backend::{FunctionInvoker, IdentityBackend, PatientDirectory, ProfileStore};
use crate::services::session_store::SessionStore;

// ----------------------------------------------------------------------------
// Logger de captura (registros por hilo: cada test corre en su propio hilo)
// ----------------------------------------------------------------------------

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records.borrow_mut().push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

/// Instalar el logger (idempotente) y vaciar los registros del hilo actual
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

pub fn error_count() -> usize {
    logged(Level::Error).len()
}

// ----------------------------------------------------------------------------
// Fakes
// ----------------------------------------------------------------------------

pub fn user(id: &str, name: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: Some(format!("{}@example.com", id)),
        user_metadata: UserMetadata { full_name: Some(name.to_string()) },
    }
}

pub fn token_for(user: &AuthUser) -> String {
    format!("token-{}", user.id)
}

pub fn session_for(user: &AuthUser) -> AuthSession {
    AuthSession {
        access_token: token_for(user),
        refresh_token: None,
        user: user.clone(),
    }
}

pub fn link(id: &str, name: &str, relationship: &str) -> PatientLink {
    PatientLink {
        patient_id: id.to_string(),
        patient_name: name.to_string(),
        relationship_type: relationship.to_string(),
    }
}

/// Backend en memoria. `None` en profiles/patients simula un error de red.
#[derive(Default)]
pub struct FakeBackend {
    pub function_response: Option<Value>,
    pub profiles: Option<Vec<ProfileId>>,
    pub patients: Option<Vec<PatientLink>>,
    /// (email, password, usuario)
    pub accounts: Vec<(String, String, AuthUser)>,
    pub admin_ids: Vec<String>,
    pub fail_admin_lookup: bool,
    pub require_email_confirmation: bool,

    pub invocations: RefCell<Vec<(String, Value)>>,
    pub profile_queries: RefCell<Vec<u32>>,
    pub signed_out_tokens: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn with_account(mut self, email: &str, password: &str, user: AuthUser) -> Self {
        self.accounts.push((email.to_string(), password.to_string(), user));
        self
    }

    fn user_for_token(&self, token: &str) -> Option<AuthUser> {
        self.accounts
            .iter()
            .map(|(_, _, user)| user)
            .find(|user| token_for(user) == token)
            .cloned()
    }
}

#[async_trait(?Send)]
impl FunctionInvoker for FakeBackend {
    async fn invoke(&self, function: &str, body: &Value) -> AppResult<Value> {
        self.invocations.borrow_mut().push((function.to_string(), body.clone()));
        self.function_response
            .clone()
            .ok_or_else(|| AppError::Http { status: 500, message: "edge function crashed".to_string() })
    }
}

#[async_trait(?Send)]
impl ProfileStore for FakeBackend {
    async fn profile_ids(&self, limit: u32) -> AppResult<Vec<ProfileId>> {
        self.profile_queries.borrow_mut().push(limit);
        match &self.profiles {
            Some(rows) => Ok(rows.iter().take(limit as usize).cloned().collect()),
            None => Err(AppError::Network("connection reset".to_string())),
        }
    }
}

#[async_trait(?Send)]
impl PatientDirectory for FakeBackend {
    async fn linked_patients(&self, _guardian_id: &str) -> AppResult<Vec<PatientLink>> {
        self.patients
            .clone()
            .ok_or_else(|| AppError::Network("timeout".to_string()))
    }
}

#[async_trait(?Send)]
impl IdentityBackend for FakeBackend {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.accounts
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(_, _, user)| session_for(user))
            .ok_or_else(|| AppError::Http { status: 400, message: "Invalid login credentials".to_string() })
    }

    async fn sign_up(&self, email: &str, _password: &str, full_name: &str) -> AppResult<Option<AuthSession>> {
        if self.require_email_confirmation {
            return Ok(None);
        }
        let new_user = AuthUser {
            id: format!("new-{}", email),
            email: Some(email.to_string()),
            user_metadata: UserMetadata { full_name: Some(full_name.to_string()) },
        };
        Ok(Some(session_for(&new_user)))
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        self.signed_out_tokens.borrow_mut().push(access_token.to_string());
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> AppResult<AuthUser> {
        if let Some(user) = self.user_for_token(access_token) {
            return Ok(user);
        }
        if let Some(id) = access_token.strip_prefix("token-new-") {
            return Ok(AuthUser {
                id: format!("new-{}", id),
                email: Some(id.to_string()),
                user_metadata: UserMetadata::default(),
            });
        }
        Err(AppError::Http { status: 401, message: "invalid JWT".to_string() })
    }

    async fn is_admin(&self, _access_token: &str, user_id: &str) -> AppResult<bool> {
        if self.fail_admin_lookup {
            return Err(AppError::Network("rpc unavailable".to_string()));
        }
        Ok(self.admin_ids.iter().any(|id| id == user_id))
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn with_session(session: AuthSession) -> Self {
        Self { session: RefCell::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &AuthSession) -> AppResult<()> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.session.borrow_mut() = None;
        Ok(())
    }
}
