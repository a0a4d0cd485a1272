// ============================================================================
// SW MODULE - Notificaciones del service worker
// ============================================================================

pub mod payload;
pub mod host;
pub mod handlers;
pub mod worker;

pub use worker::start_service_worker;
