pub mod auth;
pub mod patient;
pub mod guardian_event;

pub use auth::{AuthUser, AuthSession, AuthSnapshot, UserMetadata, TokenResponse};
pub use patient::{PatientLink, ProfileId};
pub use guardian_event::{GuardianEvent, GuardianEventType};
