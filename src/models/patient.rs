use serde::{Deserialize, Serialize};

/// Paciente vinculado a un responsable (solo lectura)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientLink {
    pub patient_id: String,
    pub patient_name: String,
    pub relationship_type: String,
}

/// Fila mínima de `profiles` usada por el chequeo de base vacía
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileId {
    pub id: String,
}
