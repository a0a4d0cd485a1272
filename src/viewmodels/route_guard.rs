// ============================================================================
// ROUTE GUARD - Decisión de render según el estado de autenticación
// ============================================================================

use crate::models::AuthSnapshot;
use crate::router::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Requiere sesión iniciada
    Authenticated,
    /// Requiere sesión + rol admin
    Admin,
    /// Solo sin sesión (login): un usuario ya autenticado vuelve a `/`
    Guest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth aún cargando: spinner, no se revela contenido
    Loading,
    Allow,
    /// Redirección reemplazando el historial
    Redirect(Route),
}

/// Se re-evalúa en cada cambio del snapshot; sin reintentos
pub fn decide(guard: Guard, auth: &AuthSnapshot) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }
    match (guard, auth.is_authenticated()) {
        (Guard::Guest, true) => GuardDecision::Redirect(Route::Home),
        (Guard::Guest, false) => GuardDecision::Allow,
        (_, false) => GuardDecision::Redirect(Route::Login),
        (Guard::Admin, true) if !auth.is_admin => GuardDecision::Redirect(Route::Patient),
        _ => GuardDecision::Allow,
    }
}
