// ============================================================================
// ERRORES - Tipo de error unificado para servicios y service worker
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AppError {
    /// Fallo de red (sin respuesta del servidor)
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta HTTP no-2xx de Supabase
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// JSON inválido (respuesta o payload)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error devuelto por una API del navegador
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// Operación que requiere sesión iniciada
    #[error("No hay sesión activa")]
    NotAuthenticated,
}

impl From<JsValue> for AppError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&js_val)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        AppError::JavaScript(message)
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status() {
        let err = AppError::Http { status: 500, message: "boom".to_string() };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn serde_errors_convert_to_parse() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
