pub mod backend;
pub mod api_client;
pub mod session_store;
pub mod guardian_notifier;
pub mod database_status;

pub use backend::*;
pub use api_client::SupabaseClient;
pub use session_store::{LocalSessionStore, SessionStore};
pub use guardian_notifier::GuardianNotifier;
pub use database_status::check_status;
