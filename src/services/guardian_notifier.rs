// ============================================================================
// GUARDIAN NOTIFIER - Notificación best-effort a los responsables
// ============================================================================
// Nunca propaga errores: la acción principal (tomar un remedio, crear una
// consulta) no puede fallar porque la notificación falló.
// ============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use js_sys::Promise;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use crate::models::{GuardianEvent, GuardianEventType};
use crate::services::api_client::SupabaseClient;
use crate::services::backend::FunctionInvoker;
use crate::utils::{js_to_json, json_to_js, NOTIFY_GUARDIANS_FUNCTION};

pub struct GuardianNotifier<F> {
    functions: F,
}

impl<F: FunctionInvoker> GuardianNotifier<F> {
    pub fn new(functions: F) -> Self {
        Self { functions }
    }

    /// Invoca `notify-guardians`. `None` si algo falla (ya registrado en el log).
    pub async fn notify(
        &self,
        patient_id: &str,
        event_type: GuardianEventType,
        event_data: Value,
    ) -> Option<Value> {
        let event = GuardianEvent {
            patient_id: patient_id.to_string(),
            event_type,
            event_data,
        };
        let body = match serde_json::to_value(&event) {
            Ok(body) => body,
            Err(e) => {
                log::error!("❌ [GUARDIAN] Error serializando evento {}: {}", event_type.as_str(), e);
                return None;
            }
        };

        match self.functions.invoke(NOTIFY_GUARDIANS_FUNCTION, &body).await {
            Ok(response) => {
                log::info!("📣 [GUARDIAN] Responsables notificados ({}) para paciente {}", event_type.as_str(), patient_id);
                Some(response)
            }
            Err(e) => {
                log::error!("❌ [GUARDIAN] Error notificando responsables ({}): {}", event_type.as_str(), e);
                None
            }
        }
    }

    pub async fn notify_medication_taken(
        &self,
        patient_id: &str,
        medication_name: &str,
        taken_at: DateTime<Utc>,
    ) -> Option<Value> {
        self.notify(
            patient_id,
            GuardianEventType::MedicationTaken,
            json!({
                "medicationName": medication_name,
                "takenAt": taken_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            }),
        )
        .await
    }

    pub async fn notify_appointment_created(
        &self,
        patient_id: &str,
        doctor_name: &str,
        appointment_date: DateTime<Utc>,
    ) -> Option<Value> {
        self.notify(
            patient_id,
            GuardianEventType::AppointmentCreated,
            json!({
                "doctorName": doctor_name,
                "appointmentDate": appointment_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            }),
        )
        .await
    }
}

/// `notifyGuardians(patientId, eventType, eventData)` para el JS de la página.
/// La promesa resuelve con la respuesta de la función o `null`; nunca rechaza.
#[wasm_bindgen(js_name = notifyGuardians)]
pub fn notify_guardians(patient_id: String, event_type: String, event_data: JsValue) -> Promise {
    future_to_promise(async move {
        let Some(event_type) = GuardianEventType::parse(&event_type) else {
            log::error!("❌ [GUARDIAN] Tipo de evento desconocido: {}", event_type);
            return Ok(JsValue::NULL);
        };
        let notifier = GuardianNotifier::new(SupabaseClient::new());
        let response = notifier.notify(&patient_id, event_type, js_to_json(&event_data)).await;
        match response.map(|value| json_to_js(&value)) {
            Some(Ok(value)) => Ok(value),
            Some(Err(e)) => {
                log::error!("❌ [GUARDIAN] Respuesta no convertible a JS: {:?}", e);
                Ok(JsValue::NULL)
            }
            None => Ok(JsValue::NULL),
        }
    })
}
