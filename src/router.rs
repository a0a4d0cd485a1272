// ============================================================================
// ROUTER - Rutas de la app sobre la History API
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::state::Observable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Patient,
    Admin,
    NotFound,
}

impl Route {
    /// Ruta para un pathname; ignora query, fragmento y barra final
    pub fn from_path(path: &str) -> Self {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/patient" => Route::Patient,
            "/admin" => Route::Admin,
            _ => Route::NotFound,
        }
    }

    /// Path canónico (NotFound no tiene uno propio: se queda en la URL pedida)
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Login => Some("/login"),
            Route::Patient => Some("/patient"),
            Route::Admin => Some("/admin"),
            Route::NotFound => None,
        }
    }
}

thread_local! {
    static POPSTATE_REGISTERED: Cell<bool> = const { Cell::new(false) };
}

/// Ruta actual + navegación
#[derive(Clone)]
pub struct Router {
    current: Observable<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { current: Observable::new(initial) }
    }

    /// Router inicializado desde `window.location.pathname`
    pub fn from_location() -> Self {
        Self::new(Route::from_path(&current_pathname()))
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }

    /// Navegación normal (agrega entrada al historial)
    pub fn navigate(&self, route: Route) {
        if let Some(path) = route.path() {
            if let Err(e) = history_call(path, false) {
                log::warn!("⚠️ [ROUTER] pushState falló para {}: {:?}", path, e);
            }
        }
        self.change(route);
    }

    /// Redirección de guard: reemplaza la entrada actual (sin volver atrás a la ruta protegida)
    pub fn redirect(&self, route: Route) {
        if let Some(path) = route.path() {
            if let Err(e) = history_call(path, true) {
                log::warn!("⚠️ [ROUTER] replaceState falló para {}: {:?}", path, e);
            }
        }
        self.change(route);
    }

    fn change(&self, route: Route) {
        if self.current() != route {
            log::info!("🧭 [ROUTER] {:?} → {:?}", self.current(), route);
            self.current.set(route);
        }
    }

    /// Botones atrás/adelante del navegador. Se registra una sola vez.
    pub fn listen_popstate(&self) -> Result<(), JsValue> {
        if POPSTATE_REGISTERED.with(|flag| flag.replace(true)) {
            log::warn!("⚠️ [ROUTER] listener popstate ya registrado, ignorando");
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let router = self.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
            router.change(Route::from_path(&current_pathname()));
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // Listener global registrado una vez: el closure vive lo mismo que la página
        closure.forget();
        Ok(())
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn history_call(path: &str, replace: bool) -> Result<(), JsValue> {
    let history = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/patient?tab=meds"), Route::Patient);
        assert_eq!(Route::from_path("/admin#top"), Route::Admin);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
        assert_eq!(Route::from_path("/login/extra"), Route::NotFound);
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn every_named_route_round_trips_through_its_path() {
        for route in [Route::Home, Route::Login, Route::Patient, Route::Admin] {
            assert_eq!(Route::from_path(route.path().unwrap()), route);
        }
    }
}
