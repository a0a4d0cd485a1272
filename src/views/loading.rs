use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

/// Spinner de pantalla completa (auth cargando o redirección en curso)
pub fn render_loading() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("loading-screen")
        .child(ElementBuilder::new("div")?.class("spinner").build())?
        .child(ElementBuilder::new("p")?.text("Carregando...").build())?
        .build())
}
