// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod app;
pub mod loading;
pub mod guarded;
pub mod login;
pub mod password_strength;
pub mod shell;
pub mod patient_selector;
pub mod placeholder;
pub mod admin;
pub mod not_found;

pub use app::render_app;
