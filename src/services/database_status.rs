use crate::services::backend::ProfileStore;

/// ¿La tabla `profiles` está vacía?
/// Un error cuenta como "no vacía" para no disparar el onboarding por un fallo de red.
pub async fn check_status<S: ProfileStore + ?Sized>(store: &S) -> bool {
    match store.profile_ids(1).await {
        Ok(rows) => {
            log::debug!("🗄️ [DB-STATUS] profiles devolvió {} fila(s)", rows.len());
            rows.is_empty()
        }
        Err(e) => {
            log::error!("❌ [DB-STATUS] Error consultando profiles: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::ProfileId;
    use crate::test_support::{capture_logs, error_count, FakeBackend};

    fn profile(id: &str) -> ProfileId {
        ProfileId { id: id.to_string() }
    }

    #[test]
    fn zero_rows_is_empty() {
        capture_logs();
        let backend = FakeBackend { profiles: Some(vec![]), ..FakeBackend::default() };
        assert!(block_on(check_status(&backend)));
        assert_eq!(*backend.profile_queries.borrow(), vec![1]);
    }

    #[test]
    fn one_row_is_not_empty() {
        capture_logs();
        let backend = FakeBackend {
            profiles: Some(vec![profile("a"), profile("b")]),
            ..FakeBackend::default()
        };
        assert!(!block_on(check_status(&backend)));
        assert_eq!(error_count(), 0);
    }

    #[test]
    fn query_error_fails_safe_to_not_empty() {
        capture_logs();
        let backend = FakeBackend { profiles: None, ..FakeBackend::default() };
        assert!(!block_on(check_status(&backend)));
        assert_eq!(error_count(), 1);
    }
}
