// ============================================================================
// DR. MEMO - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación con Supabase
// - State: Observables con Rc<RefCell>
// - SW: Notificaciones push del service worker (mismo bundle)
// ============================================================================

mod config;
mod logger;
pub mod error;
pub mod models;
pub mod utils;
pub mod services;
mod state;
mod router;
mod viewmodels;
mod dom;
mod views;
mod sw;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use crate::app::App;
use crate::config::CONFIG;

pub use crate::services::guardian_notifier::notify_guardians;
pub use crate::sw::start_service_worker;

// Instancia global de la App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // El service worker carga el mismo bundle: allí no hay window y arranca
    // con `start_service_worker`
    let Some(window) = web_sys::window() else {
        return Ok(());
    };

    console_error_panic_hook::set_once();
    logger::init(&CONFIG);
    log::info!("🚀 Dr. Memo - Rust Puro + MVVM");

    let app = App::new()?;
    app.render()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    register_service_worker(&window);
    Ok(())
}

/// Re-render completo de la app
pub(crate) fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

fn register_service_worker(window: &web_sys::Window) {
    let promise = window.navigator().service_worker().register("/sw.js");
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("🛠️ [SW] Service worker registrado"),
            Err(e) => log::warn!("⚠️ [SW] No se pudo registrar el service worker: {:?}", e),
        }
    });
}
