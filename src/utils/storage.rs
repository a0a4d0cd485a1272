use web_sys::{window, Storage};
use serde::{Serialize, de::DeserializeOwned};
use crate::error::{AppError, AppResult};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> AppResult<()> {
    let storage = get_local_storage()
        .ok_or_else(|| AppError::Storage("No se pudo acceder a localStorage".to_string()))?;
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)
        .map_err(|_| AppError::Storage(format!("Error guardando '{}' en localStorage", key)))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Valor corrupto en '{}': {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(key: &str) -> AppResult<()> {
    let storage = get_local_storage()
        .ok_or_else(|| AppError::Storage("No se pudo acceder a localStorage".to_string()))?;
    storage.remove_item(key)
        .map_err(|_| AppError::Storage(format!("Error eliminando '{}' de localStorage", key)))
}
