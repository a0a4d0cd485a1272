// ============================================================================
// ELEMENT HELPERS - Acceso al document y manipulación de hijos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

pub fn get_element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?
        .create_element(tag)
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Vaciar un contenedor (los listeners de los hijos se liberan con ellos)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Reemplazar el contenido de `parent` por un único hijo
pub fn replace_children(parent: &Element, child: &Element) -> Result<(), JsValue> {
    clear_children(parent);
    append_child(parent, child)
}
