// ============================================================================
// FUERZA DE CONTRASEÑA - Función pura (sin red, sin estado)
// ============================================================================

/// Caracteres especiales aceptados
pub const SPECIAL_CHARS: [char; 8] = ['@', '$', '!', '%', '*', '?', '&', '#'];

pub const MIN_LENGTH: usize = 8;

/// Los cinco criterios, evaluados de forma independiente
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordCriteria {
    pub fn of(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        }
    }

    pub fn satisfied(&self) -> u8 {
        [self.min_length, self.uppercase, self.lowercase, self.digit, self.special]
            .iter()
            .filter(|ok| **ok)
            .count() as u8
    }

    /// Pares (texto, cumplido) en el orden en que se muestran
    pub fn checklist(&self) -> [(&'static str, bool); 5] {
        [
            ("Pelo menos 8 caracteres", self.min_length),
            ("Uma letra maiúscula", self.uppercase),
            ("Uma letra minúscula", self.lowercase),
            ("Um número", self.digit),
            ("Um caractere especial (@$!%*?&#)", self.special),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            StrengthLevel::Weak
        } else if score < 80 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Fraca",
            StrengthLevel::Medium => "Média",
            StrengthLevel::Strong => "Forte",
        }
    }

    /// Clase CSS de la barra
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "strength-weak",
            StrengthLevel::Medium => "strength-medium",
            StrengthLevel::Strong => "strength-strong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub criteria: PasswordCriteria,
    /// 0..=100 en pasos de 20
    pub score: u8,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        self.level.label()
    }
}

/// Evaluar una contraseña. `None` para la contraseña vacía: no se muestra nada.
pub fn evaluate(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }
    let criteria = PasswordCriteria::of(password);
    let score = criteria.satisfied() * 20;
    Some(PasswordStrength {
        criteria,
        score,
        level: StrengthLevel::from_score(score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_renders_nothing() {
        assert_eq!(evaluate(""), None);
    }

    #[test]
    fn lowercase_only_is_weak() {
        let result = evaluate("abc").unwrap();
        assert_eq!(
            result.criteria,
            PasswordCriteria { lowercase: true, ..PasswordCriteria::default() }
        );
        assert_eq!(result.score, 20);
        assert_eq!(result.label(), "Fraca");
    }

    #[test]
    fn all_criteria_is_strong() {
        let result = evaluate("Abc12345!").unwrap();
        assert_eq!(result.criteria.satisfied(), 5);
        assert_eq!(result.score, 100);
        assert_eq!(result.label(), "Forte");
    }

    #[test]
    fn label_thresholds() {
        // 2 criterios (minúscula + dígito) = 40
        assert_eq!(evaluate("abc1").unwrap().label(), "Média");
        // 3 criterios = 60
        assert_eq!(evaluate("Abc1").unwrap().label(), "Média");
        // 4 criterios = 80
        assert_eq!(evaluate("Abcdefg1").unwrap().label(), "Forte");
        // solo dígitos = 20
        assert_eq!(evaluate("1").unwrap().label(), "Fraca");
    }

    #[test]
    fn each_special_char_counts() {
        for c in SPECIAL_CHARS {
            assert!(PasswordCriteria::of(&c.to_string()).special, "{} no reconocido", c);
        }
        assert!(!PasswordCriteria::of("^-_+=").special);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(PasswordCriteria::of("çãéíóúâê").min_length);
        assert!(!PasswordCriteria::of("çãéíóúâ").min_length);
    }

    #[test]
    fn score_is_always_a_multiple_of_twenty() {
        for password in ["a", "A", "1", "#", "aA1#", "aaaaaaaa", "Aa1#Aa1#", "ÁÉÍ"] {
            if let Some(result) = evaluate(password) {
                assert_eq!(result.score % 20, 0);
                assert!(result.score <= 100);
            }
        }
    }
}
