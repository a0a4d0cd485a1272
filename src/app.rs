// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{get_element_by_id, replace_children};
use crate::models::AuthSnapshot;
use crate::router::Router;
use crate::services::{LocalSessionStore, SupabaseClient};
use crate::state::AppState;
use crate::utils::ROOT_ELEMENT_ID;
use crate::viewmodels::{
    AuthViewModel, DatabaseStatus, DatabaseStatusViewModel, NavigationViewModel, PatientSelectorViewModel,
};
use crate::views::render_app;

/// Proveedor de auth concreto de la app
pub type AppAuth = AuthViewModel<SupabaseClient, LocalSessionStore>;

/// Aplicación principal
pub struct App {
    state: AppState,
    auth: AppAuth,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let router = Router::from_location();
        router.listen_popstate()?;

        let state = AppState::new(router);
        let auth = AuthViewModel::new(state.auth.clone(), SupabaseClient::new(), LocalSessionStore);

        watch_session(&state);

        // Re-render batcheado: varios cambios en el mismo tick = un render
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        {
            let auth = auth.clone();
            spawn_local(async move {
                auth.restore().await;
            });
        }

        Ok(Self { state, auth, root })
    }

    /// Renderizar aplicación (re-render completo del root)
    pub fn render(&self) -> Result<(), JsValue> {
        let view = render_app(&self.state, &self.auth)?;
        replace_children(&self.root, &view)
    }
}

/// Cambio de usuario observado en el contexto de auth
#[derive(Clone, Debug, PartialEq, Eq)]
enum SessionChange {
    SignedIn(String),
    SignedOut,
}

/// Compara el snapshot con el último usuario visto. Mientras auth carga no hay cambio.
fn session_change(last_user: &mut Option<String>, snapshot: &AuthSnapshot) -> Option<SessionChange> {
    if snapshot.loading {
        return None;
    }
    let user_id = snapshot.user.as_ref().map(|user| user.id.clone());
    if *last_user == user_id {
        return None;
    }
    *last_user = user_id.clone();
    Some(match user_id {
        Some(id) => SessionChange::SignedIn(id),
        None => SessionChange::SignedOut,
    })
}

/// Datos que dependen del usuario: pacientes vinculados y estado de la base
fn watch_session(state: &AppState) {
    let last_user = Rc::new(RefCell::new(None::<String>));
    let watcher = state.clone();

    state.auth.subscribe(move || {
        let change = session_change(&mut last_user.borrow_mut(), &watcher.auth.snapshot());
        match change {
            Some(SessionChange::SignedIn(user_id)) => {
                let patients = PatientSelectorViewModel::new(watcher.patients.clone());
                let database = DatabaseStatusViewModel::new(watcher.database.clone());
                spawn_local(async move {
                    let client = SupabaseClient::new();
                    patients.load(&client, &user_id).await;
                    database.check(&client).await;
                });
            }
            Some(SessionChange::SignedOut) => {
                NavigationViewModel::new(watcher.tab.clone()).reset();
                PatientSelectorViewModel::new(watcher.patients.clone()).clear();
                watcher.database.set(DatabaseStatus::default());
            }
            None => {}
        }
    });
}
