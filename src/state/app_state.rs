// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::router::Router;
use crate::state::{AuthState, Observable};
use crate::viewmodels::{DatabaseStatus, PatientSelection, Tab};

/// Estado global: contexto de auth + estado de UI efímero
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub router: Router,
    pub tab: Observable<Tab>,
    pub patients: Observable<PatientSelection>,
    pub database: Observable<DatabaseStatus>,
}

impl AppState {
    pub fn new(router: Router) -> Self {
        Self {
            auth: AuthState::new(),
            router,
            tab: Observable::new(Tab::default()),
            patients: Observable::new(PatientSelection::default()),
            database: Observable::new(DatabaseStatus::default()),
        }
    }

    /// Un mismo callback para cualquier cambio que afecte al render
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        self.auth.subscribe(callback.clone());
        self.router.subscribe(callback.clone());
        self.tab.subscribe(callback.clone());
        self.patients.subscribe(callback.clone());
        self.database.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::router::Route;

    #[test]
    fn every_observable_triggers_the_change_callback() {
        let state = AppState::new(Router::new(Route::Home));
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move || hits.set(hits.get() + 1));
        }

        state.tab.set(Tab::Meds);
        state.patients.update(|p| p.loading = true);
        state.database.update(|d| d.loading = true);
        state.auth.publish(crate::models::AuthSnapshot::signed_out());

        assert_eq!(hits.get(), 4);
    }
}
