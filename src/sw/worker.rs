// ============================================================================
// SERVICE WORKER - Registro de listeners sobre ServiceWorkerGlobalScope
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    ClientQueryOptions, ClientType, ExtendableEvent, ExtendableMessageEvent, NotificationEvent,
    NotificationOptions, PushEvent, ServiceWorkerGlobalScope, WindowClient,
};
use crate::config::{AppConfig, CONFIG};
use crate::error::{AppError, AppResult};
use crate::sw::handlers::{process_click, process_message, process_push, PendingWork};
use crate::sw::host::{NotificationHost, WindowHandle, WindowHost};
use crate::sw::payload::NotificationRequest;
use crate::utils::js_to_json;

pub struct ServiceWorkerHost {
    scope: ServiceWorkerGlobalScope,
    config: AppConfig,
}

impl ServiceWorkerHost {
    pub fn new(scope: ServiceWorkerGlobalScope, config: AppConfig) -> Self {
        Self { scope, config }
    }
}

#[async_trait(?Send)]
impl NotificationHost for ServiceWorkerHost {
    async fn show(&self, request: &NotificationRequest) -> AppResult<()> {
        let options_json = serde_json::to_string(&request.options)?;
        let options: NotificationOptions = js_sys::JSON::parse(&options_json)?.unchecked_into();
        let promise = self
            .scope
            .registration()
            .show_notification_with_options(&request.title, &options)?;
        JsFuture::from(promise).await?;
        Ok(())
    }
}

impl WindowHandle for WindowClient {
    fn url(&self) -> String {
        web_sys::Client::url(self)
    }
}

#[async_trait(?Send)]
impl WindowHost for ServiceWorkerHost {
    type Window = WindowClient;

    fn origin(&self) -> String {
        self.scope.location().origin()
    }

    async fn windows(&self) -> AppResult<Vec<WindowClient>> {
        let options = ClientQueryOptions::new();
        options.set_include_uncontrolled(true);
        options.set_type(ClientType::Window);
        let clients = JsFuture::from(self.scope.clients().match_all_with_options(&options)).await?;
        Ok(Array::from(&clients)
            .iter()
            .filter_map(|client| client.dyn_into::<WindowClient>().ok())
            .collect())
    }

    async fn focus(&self, window: &WindowClient) -> AppResult<()> {
        JsFuture::from(window.focus()?).await?;
        Ok(())
    }

    async fn open_window(&self, url: &str) -> AppResult<()> {
        JsFuture::from(self.scope.clients().open_window(url)).await?;
        Ok(())
    }
}

fn wait_until(event: &ExtendableEvent, work: PendingWork) {
    if let Err(e) = event.wait_until(&work.into_promise()) {
        log::error!("❌ [SW] waitUntil falló: {:?}", e);
    }
}

fn add_listener<E, F>(scope: &ServiceWorkerGlobalScope, name: &str, handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: Fn(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: JsValue| {
        handler(event.unchecked_into::<E>());
    }) as Box<dyn FnMut(JsValue)>);
    scope.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    // Los listeners del worker viven tanto como el propio worker
    closure.forget();
    Ok(())
}

/// Punto de entrada del service worker (llamado desde `sw.js`)
#[wasm_bindgen]
pub fn start_service_worker() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::logger::init(&CONFIG);

    let scope: ServiceWorkerGlobalScope = js_sys::global()
        .dyn_into()
        .map_err(|_| AppError::JavaScript("No es un ServiceWorkerGlobalScope".to_string()))?;
    let host = Rc::new(ServiceWorkerHost::new(scope.clone(), CONFIG.clone()));

    {
        let host = host.clone();
        add_listener(&scope, "push", move |event: PushEvent| {
            let raw = event.data().map(|data| data.text());
            let now_ms = js_sys::Date::now();
            let host = host.clone();
            let work = PendingWork::new(async move {
                process_push(&*host, &host.config, raw.as_deref(), now_ms).await;
            });
            wait_until(&event, work);
        })?;
    }

    {
        let host = host.clone();
        add_listener(&scope, "notificationclick", move |event: NotificationEvent| {
            let notification = event.notification();
            notification.close();
            let data = js_to_json(&notification.data());
            let host = host.clone();
            let work = PendingWork::new(async move {
                process_click(&*host, &data).await;
            });
            wait_until(&event, work);
        })?;
    }

    add_listener(&scope, "message", move |event: ExtendableMessageEvent| {
        let message = js_to_json(&event.data());
        let host = host.clone();
        let work = PendingWork::new(async move {
            process_message(&*host, &host.config, &message).await;
        });
        wait_until(&event, work);
    })?;

    log::info!("🛠️ [SW] Service worker iniciado");
    Ok(())
}
