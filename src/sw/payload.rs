// ============================================================================
// PAYLOADS - Notificaciones push y mensajes SHOW_NOTIFICATION
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use crate::config::AppConfig;

pub const DEFAULT_TITLE: &str = "Dr. Memo";
pub const DEFAULT_BODY: &str = "Você tem uma notificação";
pub const DEFAULT_CLICK_ACTION: &str = "/";
pub const DEFAULT_VIBRATION: [u32; 3] = [200, 100, 200];
/// Tag fijo: mensajes repetidos reemplazan la notificación en vez de apilarse
pub const NOTIFICATION_TAG: &str = "dr-memo-notification";
pub const SHOW_NOTIFICATION_MESSAGE: &str = "SHOW_NOTIFICATION";

/// Contenido de una notificación push (después del merge con los defaults)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibrate: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl NotificationPayload {
    /// Defaults de una notificación push; `now_ms` = Date.now()
    pub fn defaults(config: &AppConfig, now_ms: f64) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            icon: Some(config.notification_icon.clone()),
            badge: Some(config.notification_badge.clone()),
            vibrate: Some(DEFAULT_VIBRATION.to_vec()),
            data: Some(json!({
                "timestamp": now_ms,
                "primaryKey": 1,
                "clickAction": DEFAULT_CLICK_ACTION,
            })),
        }
    }

    pub fn into_request(self) -> NotificationRequest {
        NotificationRequest {
            title: self.title,
            options: ShowOptions {
                body: self.body,
                icon: self.icon,
                badge: self.badge,
                vibrate: self.vibrate,
                data: self.data,
                tag: None,
                require_interaction: None,
                actions: Vec::new(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

/// Objeto `NotificationOptions` de `registration.showNotification`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowOptions {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrate: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_interaction: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NotificationAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationRequest {
    pub title: String,
    pub options: ShowOptions,
}

/// Merge superficial del JSON recibido sobre los defaults (los campos recibidos ganan).
/// Payload ausente o no parseable = defaults intactos.
pub fn merge_push_payload(defaults: NotificationPayload, raw: Option<&str>) -> NotificationPayload {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return defaults;
    };

    let parsed: Map<String, Value> = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            log::error!("❌ [SW] Payload push no es un objeto JSON: {}", other);
            return defaults;
        }
        Err(e) => {
            log::error!("❌ [SW] Error parseando payload push: {}", e);
            return defaults;
        }
    };

    let mut merged = defaults;
    if let Some(title) = received_field(&parsed, "title") {
        merged.title = title;
    }
    if let Some(body) = received_field(&parsed, "body") {
        merged.body = body;
    }
    if let Some(icon) = received_field(&parsed, "icon") {
        merged.icon = Some(icon);
    }
    if let Some(badge) = received_field(&parsed, "badge") {
        merged.badge = Some(badge);
    }
    if let Some(vibrate) = received_field(&parsed, "vibrate") {
        merged.vibrate = Some(vibrate);
    }
    if let Some(data) = received_field(&parsed, "data") {
        merged.data = Some(data);
    }
    merged
}

/// Campo recibido con el tipo esperado. `null` o tipo inválido = ausente (solo ese campo).
fn received_field<T: DeserializeOwned>(parsed: &Map<String, Value>, key: &str) -> Option<T> {
    match parsed.get(key)? {
        Value::Null => None,
        value => match serde_json::from_value(value.clone()) {
            Ok(field) => Some(field),
            Err(e) => {
                log::warn!("⚠️ [SW] Campo push '{}' ignorado: {}", key, e);
                None
            }
        },
    }
}

/// Payload de `{type: "SHOW_NOTIFICATION", payload: {...}}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessagePayload {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

/// `None` para mensajes de otro tipo o mal formados
pub fn parse_show_message(message: &Value) -> Option<MessagePayload> {
    if message.get("type").and_then(Value::as_str) != Some(SHOW_NOTIFICATION_MESSAGE) {
        return None;
    }
    let payload = message.get("payload").cloned().unwrap_or(Value::Null);
    match serde_json::from_value(payload) {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::error!("❌ [SW] Mensaje SHOW_NOTIFICATION inválido: {}", e);
            None
        }
    }
}

/// Notificación persistente con acciones "Open App" / "Dismiss"
pub fn message_request(config: &AppConfig, payload: MessagePayload) -> NotificationRequest {
    NotificationRequest {
        title: payload.title,
        options: ShowOptions {
            body: payload.body,
            icon: Some(payload.icon.unwrap_or_else(|| config.notification_icon.clone())),
            badge: Some(payload.badge.unwrap_or_else(|| config.notification_badge.clone())),
            vibrate: None,
            data: None,
            tag: Some(NOTIFICATION_TAG.to_string()),
            require_interaction: Some(true),
            actions: vec![
                NotificationAction { action: "open".to_string(), title: "Open App".to_string() },
                NotificationAction { action: "dismiss".to_string(), title: "Dismiss".to_string() },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, error_count, logged};

    fn defaults() -> NotificationPayload {
        NotificationPayload::defaults(&AppConfig::default(), 1_700_000_000_000.0)
    }

    #[test]
    fn partial_payload_keeps_default_fields() {
        let merged = merge_push_payload(defaults(), Some(r#"{"title":"X"}"#));
        assert_eq!(merged.title, "X");
        assert_eq!(merged.body, DEFAULT_BODY);
        assert_eq!(merged.icon, defaults().icon);
        assert_eq!(merged.vibrate, Some(vec![200, 100, 200]));
        assert_eq!(merged.data.unwrap()["clickAction"], "/");
    }

    #[test]
    fn received_fields_take_precedence() {
        let merged = merge_push_payload(
            defaults(),
            Some(r#"{"title":"Hora do remédio","body":"Losartana 50mg","data":{"clickAction":"/patient"}}"#),
        );
        assert_eq!(merged.title, "Hora do remédio");
        assert_eq!(merged.body, "Losartana 50mg");
        assert_eq!(merged.data, Some(json!({ "clickAction": "/patient" })));
        assert_eq!(merged.badge, defaults().badge);
    }

    #[test]
    fn missing_payload_uses_defaults() {
        assert_eq!(merge_push_payload(defaults(), None), defaults());
        assert_eq!(merge_push_payload(defaults(), Some("  ")), defaults());
    }

    #[test]
    fn invalid_json_is_logged_and_ignored() {
        capture_logs();
        assert_eq!(merge_push_payload(defaults(), Some("not json")), defaults());
        assert_eq!(merge_push_payload(defaults(), Some("[1,2]")), defaults());
        assert_eq!(error_count(), 2);
    }

    #[test]
    fn null_or_mistyped_fields_fall_back_one_by_one() {
        capture_logs();
        let merged = merge_push_payload(
            defaults(),
            Some(r#"{"title":"Hora do remédio","body":null,"icon":42,"vibrate":[300]}"#),
        );

        assert_eq!(merged.title, "Hora do remédio");
        assert_eq!(merged.body, DEFAULT_BODY);
        assert_eq!(merged.icon, defaults().icon);
        assert_eq!(merged.vibrate, Some(vec![300]));
        assert_eq!(error_count(), 0);
        assert_eq!(logged(log::Level::Warn).len(), 1);
    }

    #[test]
    fn show_message_builds_persistent_notification() {
        let message = json!({
            "type": "SHOW_NOTIFICATION",
            "payload": { "title": "Consulta amanhã", "body": "Dr. Paulo às 9h" }
        });
        let payload = parse_show_message(&message).unwrap();
        let request = message_request(&AppConfig::default(), payload);

        assert_eq!(request.title, "Consulta amanhã");
        assert_eq!(request.options.tag.as_deref(), Some(NOTIFICATION_TAG));
        assert_eq!(request.options.require_interaction, Some(true));
        assert_eq!(request.options.icon, Some(AppConfig::default().notification_icon));
        let titles: Vec<_> = request.options.actions.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Open App", "Dismiss"]);
    }

    #[test]
    fn other_messages_are_ignored() {
        assert_eq!(parse_show_message(&json!({ "type": "SKIP_WAITING" })), None);
        assert_eq!(parse_show_message(&json!("hello")), None);
    }

    #[test]
    fn show_options_serialize_to_notification_options_shape() {
        let request = message_request(
            &AppConfig::default(),
            MessagePayload {
                title: "t".to_string(),
                body: "b".to_string(),
                icon: Some("/i.png".to_string()),
                badge: None,
            },
        );
        let js = serde_json::to_value(&request.options).unwrap();
        assert_eq!(js["requireInteraction"], true);
        assert_eq!(js["icon"], "/i.png");
        assert_eq!(js["actions"][1]["action"], "dismiss");
        assert!(js.get("vibrate").is_none());
    }
}
