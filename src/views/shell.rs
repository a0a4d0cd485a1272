// ============================================================================
// SHELL VIEW - Header + contenido de la pestaña + barra inferior
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::AppAuth;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{NavigationViewModel, Tab};
use crate::views::patient_selector::render_patient_selector;
use crate::views::placeholder::render_screen;

pub fn render_shell(state: &AppState, auth: &AppAuth) -> Result<Element, JsValue> {
    let nav = NavigationViewModel::new(state.tab.clone());
    let active = nav.active();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text("Dr. Memo").build())?
        .build();
    if let Some(selector) = render_patient_selector(state)? {
        append_child(&header, &selector)?;
    }

    let content = ElementBuilder::new("main")?
        .class("app-content")
        .child(render_screen(active, state, auth)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(header)?
        .child(content)?
        .child(render_bottom_nav(&nav, active)?)?
        .build())
}

fn render_bottom_nav(nav: &NavigationViewModel, active: Tab) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("nav")?
        .class("bottom-nav")
        .build();

    for tab in Tab::ALL {
        let handler = nav.clone();
        let button = ElementBuilder::new("button")?
            .class(if tab == active { "nav-item active" } else { "nav-item" })
            .attr("type", "button")?
            .attr("data-tab", tab.id())?
            .child(ElementBuilder::new("span")?.class("nav-icon").text(tab.icon()).build())?
            .child(ElementBuilder::new("span")?.class("nav-label").text(tab.label()).build())?
            .on_click(move |_| handler.select_tab(tab))?
            .build();
        append_child(&bar, &button)?;
    }

    Ok(bar)
}
