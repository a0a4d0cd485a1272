// ============================================================================
// PATIENT SELECTOR VIEWMODEL - "Visualizando como" para responsables
// ============================================================================

use crate::models::PatientLink;
use crate::services::PatientDirectory;
use crate::state::Observable;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientSelection {
    pub patients: Vec<PatientLink>,
    pub selected_id: Option<String>,
    pub loading: bool,
}

impl PatientSelection {
    /// Paciente actualmente visualizado
    pub fn viewing_as(&self) -> Option<&PatientLink> {
        let id = self.selected_id.as_deref()?;
        self.patients.iter().find(|p| p.patient_id == id)
    }

    /// Reemplaza la lista completa; mantiene la selección si sigue existiendo
    fn replace_patients(&mut self, patients: Vec<PatientLink>) {
        let keep = self
            .selected_id
            .as_deref()
            .map(|id| patients.iter().any(|p| p.patient_id == id))
            .unwrap_or(false);
        if !keep {
            self.selected_id = patients.first().map(|p| p.patient_id.clone());
        }
        self.patients = patients;
    }
}

#[derive(Clone)]
pub struct PatientSelectorViewModel {
    state: Observable<PatientSelection>,
}

impl PatientSelectorViewModel {
    pub fn new(state: Observable<PatientSelection>) -> Self {
        Self { state }
    }

    pub fn selection(&self) -> PatientSelection {
        self.state.get()
    }

    /// Cargar los pacientes vinculados. Un error deja la lista vacía (ya registrado).
    pub async fn load<D: PatientDirectory + ?Sized>(&self, directory: &D, guardian_id: &str) {
        self.state.update(|s| s.loading = true);
        let patients = match directory.linked_patients(guardian_id).await {
            Ok(patients) => {
                log::info!("👪 [PATIENTS] {} paciente(s) vinculados", patients.len());
                patients
            }
            Err(e) => {
                log::error!("❌ [PATIENTS] Error cargando pacientes: {}", e);
                Vec::new()
            }
        };
        self.state.update(|s| {
            s.replace_patients(patients);
            s.loading = false;
        });
    }

    /// Ids que no están en la lista se ignoran
    pub fn select(&self, patient_id: &str) {
        let known = self.state.with(|s| s.patients.iter().any(|p| p.patient_id == patient_id));
        if !known {
            log::warn!("⚠️ [PATIENTS] Paciente desconocido: {}", patient_id);
            return;
        }
        self.state.update(|s| s.selected_id = Some(patient_id.to_string()));
    }

    pub fn clear(&self) {
        self.state.set(PatientSelection::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::test_support::{capture_logs, error_count, link, FakeBackend};

    fn viewmodel() -> PatientSelectorViewModel {
        PatientSelectorViewModel::new(Observable::new(PatientSelection::default()))
    }

    #[test]
    fn load_selects_first_patient() {
        capture_logs();
        let backend = FakeBackend {
            patients: Some(vec![link("p1", "Dona Rosa", "child"), link("p2", "Seu Antônio", "caregiver")]),
            ..FakeBackend::default()
        };
        let vm = viewmodel();

        block_on(vm.load(&backend, "g1"));

        let selection = vm.selection();
        assert!(!selection.loading);
        assert_eq!(selection.viewing_as().unwrap().patient_name, "Dona Rosa");
    }

    #[test]
    fn select_switches_viewing_context() {
        capture_logs();
        let backend = FakeBackend {
            patients: Some(vec![link("p1", "Dona Rosa", "child"), link("p2", "Seu Antônio", "caregiver")]),
            ..FakeBackend::default()
        };
        let vm = viewmodel();
        block_on(vm.load(&backend, "g1"));

        vm.select("p2");
        assert_eq!(vm.selection().viewing_as().unwrap().patient_id, "p2");

        vm.select("p404");
        assert_eq!(vm.selection().viewing_as().unwrap().patient_id, "p2");
    }

    #[test]
    fn refetch_replaces_list_and_keeps_surviving_selection() {
        capture_logs();
        let vm = viewmodel();
        let first = FakeBackend {
            patients: Some(vec![link("p1", "A", "child"), link("p2", "B", "child")]),
            ..FakeBackend::default()
        };
        block_on(vm.load(&first, "g1"));
        vm.select("p2");

        let second = FakeBackend {
            patients: Some(vec![link("p2", "B", "child"), link("p3", "C", "spouse")]),
            ..FakeBackend::default()
        };
        block_on(vm.load(&second, "g1"));
        assert_eq!(vm.selection().patients.len(), 2);
        assert_eq!(vm.selection().selected_id.as_deref(), Some("p2"));

        let third = FakeBackend {
            patients: Some(vec![link("p3", "C", "spouse")]),
            ..FakeBackend::default()
        };
        block_on(vm.load(&third, "g1"));
        assert_eq!(vm.selection().selected_id.as_deref(), Some("p3"));
    }

    #[test]
    fn fetch_error_leaves_empty_selection() {
        capture_logs();
        let vm = viewmodel();

        block_on(vm.load(&FakeBackend::default(), "g1"));

        let selection = vm.selection();
        assert!(selection.patients.is_empty());
        assert_eq!(selection.viewing_as(), None);
        assert_eq!(error_count(), 1);
    }
}
