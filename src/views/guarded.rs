// ============================================================================
// GUARDED VIEW - Aplica la decisión del guard antes de renderizar
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::state::AppState;
use crate::viewmodels::{decide, Guard, GuardDecision};
use crate::views::loading::render_loading;

/// Spinner mientras auth carga, redirección (replaceState) o el contenido protegido
pub fn render_guarded<F>(state: &AppState, guard: Guard, render: F) -> Result<Element, JsValue>
where
    F: FnOnce() -> Result<Element, JsValue>,
{
    match decide(guard, &state.auth.snapshot()) {
        GuardDecision::Loading => render_loading(),
        GuardDecision::Allow => render(),
        GuardDecision::Redirect(route) => {
            log::info!("🛡️ [GUARD] {:?}: redirigiendo a {:?}", guard, route);
            state.router.redirect(route);
            render_loading()
        }
    }
}
