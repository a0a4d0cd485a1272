/// Códigos de frecuencia conocidos, en el orden del selector de horários
pub const FREQUENCY_CODES: [&str; 8] = [
    "once_daily",
    "twice_daily",
    "three_times_daily",
    "four_times_daily",
    "every_8_hours",
    "every_12_hours",
    "weekly",
    "as_needed",
];

/// Texto para mostrar de un código de frecuencia de medicación.
/// Códigos desconocidos se devuelven tal cual.
pub fn frequency_label(code: &str) -> &str {
    match code {
        "once_daily" => "1x ao dia",
        "twice_daily" => "2x ao dia",
        "three_times_daily" => "3x ao dia",
        "four_times_daily" => "4x ao dia",
        "every_8_hours" => "A cada 8 horas",
        "every_12_hours" => "A cada 12 horas",
        "weekly" => "Semanal",
        "as_needed" => "Quando necessário",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_translated() {
        assert_eq!(frequency_label("twice_daily"), "2x ao dia");
        assert_eq!(frequency_label("as_needed"), "Quando necessário");
    }

    #[test]
    fn every_known_code_has_a_label() {
        for code in FREQUENCY_CODES {
            assert_ne!(frequency_label(code), code);
        }
    }

    #[test]
    fn unknown_code_passes_through() {
        assert_eq!(frequency_label("every_full_moon"), "every_full_moon");
    }
}
