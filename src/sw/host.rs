// ============================================================================
// HOSTS - Lo que el service worker necesita del navegador
// ============================================================================
// Implementado sobre `ServiceWorkerGlobalScope` en `worker.rs` y con mocks en
// los tests de `handlers.rs`.
// ============================================================================

use async_trait::async_trait;
use crate::error::AppResult;
use crate::sw::payload::NotificationRequest;

#[async_trait(?Send)]
pub trait NotificationHost {
    async fn show(&self, request: &NotificationRequest) -> AppResult<()>;
}

/// Ventana cliente abierta
pub trait WindowHandle {
    fn url(&self) -> String;
}

#[async_trait(?Send)]
pub trait WindowHost {
    type Window: WindowHandle;

    /// Origen del propio worker (`self.location.origin`)
    fn origin(&self) -> String;

    /// Ventanas del mismo scope, incluidas las no controladas
    async fn windows(&self) -> AppResult<Vec<Self::Window>>;

    async fn focus(&self, window: &Self::Window) -> AppResult<()>;

    async fn open_window(&self, url: &str) -> AppResult<()>;
}

/// `scheme://host[:port]` de una URL absoluta
pub fn origin_of(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")? + 3;
    let rest = &url[scheme_end..];
    let host_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if host_len == 0 {
        return None;
    }
    Some(&url[..scheme_end + host_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_strips_path_query_and_fragment() {
        assert_eq!(origin_of("https://drmemo.app/patient?x=1"), Some("https://drmemo.app"));
        assert_eq!(origin_of("http://localhost:8080#top"), Some("http://localhost:8080"));
        assert_eq!(origin_of("https://drmemo.app"), Some("https://drmemo.app"));
    }

    #[test]
    fn relative_or_broken_urls_have_no_origin() {
        assert_eq!(origin_of("/patient"), None);
        assert_eq!(origin_of("https:///nohost"), None);
    }
}
