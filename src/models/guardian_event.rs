use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Eventos que disparan una notificación a los responsables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardianEventType {
    MedicationTaken,
    MedicationMissed,
    MedicationUpcoming,
    AppointmentCreated,
    AppointmentUpcoming,
    AppointmentCompleted,
    AppointmentCancelled,
}

impl GuardianEventType {
    pub const ALL: [GuardianEventType; 7] = [
        GuardianEventType::MedicationTaken,
        GuardianEventType::MedicationMissed,
        GuardianEventType::MedicationUpcoming,
        GuardianEventType::AppointmentCreated,
        GuardianEventType::AppointmentUpcoming,
        GuardianEventType::AppointmentCompleted,
        GuardianEventType::AppointmentCancelled,
    ];

    /// Inverso de `as_str`; `None` para tipos fuera del conjunto fijo
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event_type| event_type.as_str() == name)
    }

    /// Nombre en el wire (igual que la serialización serde)
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardianEventType::MedicationTaken => "medication_taken",
            GuardianEventType::MedicationMissed => "medication_missed",
            GuardianEventType::MedicationUpcoming => "medication_upcoming",
            GuardianEventType::AppointmentCreated => "appointment_created",
            GuardianEventType::AppointmentUpcoming => "appointment_upcoming",
            GuardianEventType::AppointmentCompleted => "appointment_completed",
            GuardianEventType::AppointmentCancelled => "appointment_cancelled",
        }
    }
}

/// Body de la edge function `notify-guardians`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianEvent {
    pub patient_id: String,
    pub event_type: GuardianEventType,
    pub event_data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_event_types() {
        for event_type in GuardianEventType::ALL {
            assert_eq!(GuardianEventType::parse(event_type.as_str()), Some(event_type));
        }
        assert_eq!(GuardianEventType::parse("medication_forgotten"), None);
    }

    #[test]
    fn as_str_matches_serde_name() {
        for event_type in GuardianEventType::ALL {
            let wire = serde_json::to_value(event_type).unwrap();
            assert_eq!(wire, Value::String(event_type.as_str().to_string()));
        }
    }

    #[test]
    fn event_body_uses_camel_case_keys() {
        let event = GuardianEvent {
            patient_id: "p-1".to_string(),
            event_type: GuardianEventType::MedicationTaken,
            event_data: serde_json::json!({ "medicationName": "Losartana" }),
        };
        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(body["patientId"], "p-1");
        assert_eq!(body["eventType"], "medication_taken");
        assert_eq!(body["eventData"]["medicationName"], "Losartana");
    }
}
