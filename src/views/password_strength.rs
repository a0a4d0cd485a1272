// ============================================================================
// PASSWORD STRENGTH - Medidor + checklist del formulario de registro
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, ElementBuilder};
use crate::utils::password::evaluate;

pub fn render_password_strength(password: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("password-strength")
        .build();
    fill_password_strength(&container, password)?;
    Ok(container)
}

/// Redibuja el medidor en su lugar (en cada tecla, sin re-render global).
/// Contraseña vacía = contenedor vacío.
pub fn fill_password_strength(container: &Element, password: &str) -> Result<(), JsValue> {
    clear_children(container);
    let Some(strength) = evaluate(password) else {
        return Ok(());
    };

    let bar = ElementBuilder::new("div")?
        .class(&format!("strength-bar {}", strength.level.css_class()))
        .attr("style", &format!("width: {}%", strength.score))?
        .build();
    let meter = ElementBuilder::new("div")?
        .class("strength-meter")
        .child(bar)?
        .build();
    let label = ElementBuilder::new("span")?
        .class("strength-label")
        .text(&format!("Força da senha: {}", strength.label()))
        .build();

    let checklist = ElementBuilder::new("ul")?
        .class("strength-checklist")
        .build();
    for (text, met) in strength.criteria.checklist() {
        let item = ElementBuilder::new("li")?
            .class(if met { "criterion met" } else { "criterion" })
            .text(&format!("{} {}", if met { "✓" } else { "○" }, text))
            .build();
        append_child(&checklist, &item)?;
    }

    append_child(container, &meter)?;
    append_child(container, &label)?;
    append_child(container, &checklist)?;
    Ok(())
}
