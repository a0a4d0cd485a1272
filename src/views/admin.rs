use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::AppState;

/// Panel de administración (solo rol admin)
pub fn render_admin(state: &AppState) -> Result<Element, JsValue> {
    let name = state
        .auth
        .snapshot()
        .user
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    let router = state.router.clone();
    let back = ElementBuilder::new("button")?
        .class("btn-secondary")
        .attr("type", "button")?
        .text("Voltar ao app")
        .on_click(move |_| router.navigate(Route::Patient))?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("admin-panel")
        .child(ElementBuilder::new("h1")?.text("Painel administrativo").build())?
        .child(
            ElementBuilder::new("p")?
                .text(&format!("Bem-vindo(a), {}. As ferramentas de administração aparecerão aqui.", name))
                .build(),
        )?
        .child(back)?
        .build())
}
