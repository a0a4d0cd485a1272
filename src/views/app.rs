// ============================================================================
// APP VIEW - Despacho de rutas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::AppAuth;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::Guard;
use crate::views::admin::render_admin;
use crate::views::guarded::render_guarded;
use crate::views::login::render_login;
use crate::views::not_found::render_not_found;
use crate::views::shell::render_shell;

/// Renderizar la vista de la ruta actual
pub fn render_app(state: &AppState, auth: &AppAuth) -> Result<Element, JsValue> {
    let route = state.router.current();
    log::debug!("🎬 [VIEW] render_app: {:?}", route);

    match route {
        Route::Login => render_guarded(state, Guard::Guest, || render_login(auth)),
        Route::Home | Route::Patient => render_guarded(state, Guard::Authenticated, || render_shell(state, auth)),
        Route::Admin => render_guarded(state, Guard::Admin, || render_admin(state)),
        Route::NotFound => render_not_found(state),
    }
}
