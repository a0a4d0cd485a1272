// ============================================================================
// DATABASE STATUS VIEWMODEL - {is_empty, loading, recheck}
// ============================================================================

use crate::services::{check_status, ProfileStore};
use crate::state::Observable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatabaseStatus {
    /// `None` hasta que termina el primer chequeo
    pub is_empty: Option<bool>,
    pub loading: bool,
}

/// Cargando hasta la primera resolución
impl Default for DatabaseStatus {
    fn default() -> Self {
        Self { is_empty: None, loading: true }
    }
}

#[derive(Clone)]
pub struct DatabaseStatusViewModel {
    state: Observable<DatabaseStatus>,
}

impl DatabaseStatusViewModel {
    pub fn new(state: Observable<DatabaseStatus>) -> Self {
        Self { state }
    }

    pub fn status(&self) -> DatabaseStatus {
        self.state.get()
    }

    /// Chequeo (también usado como `recheck`): el resultado anterior se mantiene mientras carga
    pub async fn check<S: ProfileStore + ?Sized>(&self, store: &S) {
        self.state.update(|s| s.loading = true);
        let is_empty = check_status(store).await;
        self.state.set(DatabaseStatus {
            is_empty: Some(is_empty),
            loading: false,
        });
    }

    /// Lanza un nuevo chequeo en segundo plano
    pub fn recheck<S: ProfileStore + 'static>(&self, store: S) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.check(&store).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::ProfileId;
    use crate::test_support::{capture_logs, error_count, FakeBackend};

    #[test]
    fn unknown_until_first_check() {
        let vm = DatabaseStatusViewModel::new(Observable::new(DatabaseStatus::default()));
        assert_eq!(vm.status(), DatabaseStatus { is_empty: None, loading: true });
    }

    #[test]
    fn empty_profiles_table_is_reported() {
        capture_logs();
        let vm = DatabaseStatusViewModel::new(Observable::new(DatabaseStatus::default()));
        let backend = FakeBackend { profiles: Some(vec![]), ..FakeBackend::default() };

        block_on(vm.check(&backend));

        assert_eq!(vm.status(), DatabaseStatus { is_empty: Some(true), loading: false });
    }

    #[test]
    fn recheck_replaces_previous_result() {
        capture_logs();
        let vm = DatabaseStatusViewModel::new(Observable::new(DatabaseStatus::default()));
        block_on(vm.check(&FakeBackend { profiles: Some(vec![]), ..FakeBackend::default() }));

        let populated = FakeBackend {
            profiles: Some(vec![ProfileId { id: "p1".to_string() }]),
            ..FakeBackend::default()
        };
        block_on(vm.check(&populated));

        assert_eq!(vm.status().is_empty, Some(false));
    }

    #[test]
    fn query_error_reports_not_empty() {
        capture_logs();
        let vm = DatabaseStatusViewModel::new(Observable::new(DatabaseStatus::default()));

        block_on(vm.check(&FakeBackend::default()));

        assert_eq!(vm.status(), DatabaseStatus { is_empty: Some(false), loading: false });
        assert_eq!(error_count(), 1);
    }
}
