/// Etiqueta del tipo de vínculo responsable → paciente
pub fn relationship_label(relationship_type: &str) -> &str {
    match relationship_type {
        "child" => "Filho(a)",
        "spouse" => "Cônjuge",
        "sibling" => "Irmão(ã)",
        "grandchild" => "Neto(a)",
        "caregiver" => "Cuidador(a)",
        "other" => "Outro",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(relationship_label("caregiver"), "Cuidador(a)");
        assert_eq!(relationship_label("neighbor"), "neighbor");
    }
}
