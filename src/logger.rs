// ============================================================================
// LOGGER - Logging condicional (verbose en desarrollo, solo errores en producción)
// ============================================================================

use log::LevelFilter;
use crate::config::{AppConfig, Environment};

/// Nivel máximo de log según la configuración
pub fn level_for(config: &AppConfig) -> LevelFilter {
    if !config.is_logging_enabled() {
        return LevelFilter::Off;
    }
    match config.environment {
        Environment::Development => LevelFilter::Debug,
        Environment::Production => LevelFilter::Error,
    }
}

/// Inicializar wasm_logger una sola vez al arrancar (app o service worker)
pub fn init(config: &AppConfig) {
    let filter = level_for(config);
    match filter.to_level() {
        Some(level) => {
            wasm_logger::init(wasm_logger::Config::new(level));
            log::set_max_level(filter);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
    log::debug!("🪵 [LOGGER] Nivel de log: {:?}", filter);
}
