// ============================================================================
// SW HANDLERS - push / notificationclick / message
// ============================================================================
// Cada handler devuelve un `PendingWork` que el registro entrega a
// `event.waitUntil`. Los errores se registran y nunca salen del handler.
// ============================================================================

use futures::future::LocalBoxFuture;
use js_sys::Promise;
use serde_json::Value;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::future_to_promise;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::sw::host::{origin_of, NotificationHost, WindowHandle, WindowHost};
use crate::sw::payload::{
    merge_push_payload, message_request, parse_show_message, NotificationPayload, DEFAULT_CLICK_ACTION,
};

/// Trabajo asíncrono que mantiene vivo al worker hasta terminar
pub struct PendingWork(LocalBoxFuture<'static, ()>);

impl PendingWork {
    pub fn new<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        Self(Box::pin(future))
    }

    pub fn into_promise(self) -> Promise {
        let future = self.0;
        future_to_promise(async move {
            future.await;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[cfg(test)]
    pub fn run(self) {
        futures::executor::block_on(self.0);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// URL de la ventana enfocada
    Focused(String),
    Opened(String),
}

/// Destino del click: `data.clickAction` o `/`
pub fn click_target(data: &Value) -> String {
    data.get("clickAction")
        .and_then(Value::as_str)
        .filter(|target| !target.is_empty())
        .unwrap_or(DEFAULT_CLICK_ACTION)
        .to_string()
}

/// Enfoca la primera ventana del mismo origen; si no hay ninguna abre `target`
pub async fn focus_or_open<H: WindowHost>(host: &H, target: &str) -> AppResult<ClickOutcome> {
    let origin = host.origin();
    let windows = host.windows().await?;

    if let Some(window) = windows.iter().find(|w| origin_of(&w.url()) == Some(origin.as_str())) {
        host.focus(window).await?;
        return Ok(ClickOutcome::Focused(window.url()));
    }

    host.open_window(target).await?;
    Ok(ClickOutcome::Opened(target.to_string()))
}

pub async fn process_push<H: NotificationHost>(host: &H, config: &AppConfig, raw: Option<&str>, now_ms: f64) {
    let payload = merge_push_payload(NotificationPayload::defaults(config, now_ms), raw);
    log::info!("🔔 [SW] Push recibido: {}", payload.title);
    if let Err(e) = host.show(&payload.into_request()).await {
        log::error!("❌ [SW] Error mostrando notificación push: {}", e);
    }
}

pub async fn process_click<H: WindowHost>(host: &H, data: &Value) {
    let target = click_target(data);
    match focus_or_open(host, &target).await {
        Ok(ClickOutcome::Focused(url)) => log::info!("🪟 [SW] Ventana enfocada: {}", url),
        Ok(ClickOutcome::Opened(url)) => log::info!("🪟 [SW] Ventana abierta: {}", url),
        Err(e) => log::error!("❌ [SW] Error manejando click de notificación: {}", e),
    }
}

pub async fn process_message<H: NotificationHost>(host: &H, config: &AppConfig, message: &Value) {
    let Some(payload) = parse_show_message(message) else {
        return;
    };
    let request = message_request(config, payload);
    if let Err(e) = host.show(&request).await {
        log::error!("❌ [SW] Error mostrando notificación de mensaje: {}", e);
    }
}
