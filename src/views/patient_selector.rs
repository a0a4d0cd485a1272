// ============================================================================
// PATIENT SELECTOR VIEW - "Visualizando: <nome> (<parentesco>)"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change, ElementBuilder};
use crate::state::AppState;
use crate::utils::relationship_label;
use crate::viewmodels::PatientSelectorViewModel;

/// `None` cuando el usuario no es responsable de ningún paciente
pub fn render_patient_selector(state: &AppState) -> Result<Option<Element>, JsValue> {
    let selection = state.patients.get();

    if selection.loading && selection.patients.is_empty() {
        return Ok(Some(
            ElementBuilder::new("div")?
                .class("patient-selector loading")
                .text("Carregando pacientes...")
                .build(),
        ));
    }

    let Some(current) = selection.viewing_as() else {
        return Ok(None);
    };

    let container = ElementBuilder::new("div")?
        .class("patient-selector")
        .child(
            ElementBuilder::new("span")?
                .class("viewing-as")
                .text(&format!(
                    "Visualizando: {} ({})",
                    current.patient_name,
                    relationship_label(&current.relationship_type)
                ))
                .build(),
        )?
        .build();

    if selection.patients.len() > 1 {
        let select = ElementBuilder::new("select")?
            .class("patient-select")
            .attr("aria-label", "Selecionar paciente")?
            .build();
        for patient in &selection.patients {
            let mut option = ElementBuilder::new("option")?
                .attr("value", &patient.patient_id)?
                .text(&patient.patient_name);
            if patient.patient_id == current.patient_id {
                option = option.attr("selected", "selected")?;
            }
            append_child(&select, &option.build())?;
        }

        let vm = PatientSelectorViewModel::new(state.patients.clone());
        on_change(&select, move |patient_id| vm.select(&patient_id))?;
        append_child(&container, &select)?;
    }

    Ok(Some(container))
}
