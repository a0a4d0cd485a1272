use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::AppState;

/// Ruta desconocida: pública, sin guard
pub fn render_not_found(state: &AppState) -> Result<Element, JsValue> {
    let router = state.router.clone();
    let home = ElementBuilder::new("a")?
        .class("btn-link")
        .attr("href", "/")?
        .text("Voltar ao início")
        .on_click(move |event| {
            event.prevent_default();
            router.navigate(Route::Home);
        })?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .child(ElementBuilder::new("h1")?.text("404").build())?
        .child(ElementBuilder::new("p")?.text("Página não encontrada").build())?
        .child(home)?
        .build())
}
