use serde::{Deserialize, Serialize};

/// Entorno de ejecución (controla el nivel de logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Interpretar el valor de `ENVIRONMENT`; cualquier valor desconocido es desarrollo
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub environment: Environment,
    pub enable_logging: bool,
    pub notification_icon: String,
    pub notification_badge: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: String::new(),
            environment: Environment::Development,
            enable_logging: true,
            notification_icon: "/icons/icon-192x192.png".to_string(),
            notification_badge: "/icons/badge-72x72.png".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            supabase_url: option_env!("SUPABASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.supabase_url),
            supabase_anon_key: option_env!("SUPABASE_ANON_KEY")
                .unwrap_or("").to_string(),
            environment: Environment::parse(option_env!("ENVIRONMENT").unwrap_or("development")),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            notification_icon: option_env!("NOTIFICATION_ICON")
                .map(str::to_string)
                .unwrap_or(defaults.notification_icon),
            notification_badge: option_env!("NOTIFICATION_BADGE")
                .map(str::to_string)
                .unwrap_or(defaults.notification_badge),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_environment_is_development() {
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
        assert_eq!(Environment::parse(" Production "), Environment::Production);
    }
}
