// ============================================================================
// SCREENS - Pantallas de cada pestaña
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::AppAuth;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::services::SupabaseClient;
use crate::state::AppState;
use crate::utils::{frequency_label, FREQUENCY_CODES};
use crate::viewmodels::{DatabaseStatusViewModel, Tab};

/// Pantalla de la pestaña activa
pub fn render_screen(tab: Tab, state: &AppState, auth: &AppAuth) -> Result<Element, JsValue> {
    match tab {
        Tab::Home => render_home(state),
        Tab::Meds => render_meds(),
        Tab::Appointments => render_placeholder(tab, "Suas próximas consultas aparecerão aqui."),
        Tab::Contacts => render_placeholder(tab, "Seus contatos de emergência aparecerão aqui."),
        Tab::More => render_more(state, auth),
    }
}

fn screen(tab: Tab) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class(&format!("screen screen-{}", tab.id()))
        .child(ElementBuilder::new("h2")?.text(tab.label()).build())?
        .build())
}

fn render_placeholder(tab: Tab, description: &str) -> Result<Element, JsValue> {
    let section = screen(tab)?;
    append_child(&section, &ElementBuilder::new("p")?.class("placeholder").text(description).build())?;
    Ok(section)
}

fn render_meds() -> Result<Element, JsValue> {
    let section = render_placeholder(Tab::Meds, "Seus remédios e horários aparecerão aqui.")?;

    let list = ElementBuilder::new("ul")?.class("frequency-list").build();
    for code in FREQUENCY_CODES {
        append_child(&list, &ElementBuilder::new("li")?.text(frequency_label(code)).build())?;
    }
    append_child(&section, &ElementBuilder::new("h3")?.text("Frequências disponíveis").build())?;
    append_child(&section, &list)?;
    Ok(section)
}

fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let section = screen(Tab::Home)?;

    if let Some(user) = state.auth.snapshot().user {
        let greeting = ElementBuilder::new("p")?
            .class("greeting")
            .text(&format!("Olá, {}!", user.display_name()))
            .build();
        append_child(&section, &greeting)?;
    }

    let database = state.database.get();
    if database.is_empty == Some(true) {
        let vm = DatabaseStatusViewModel::new(state.database.clone());
        let recheck = ElementBuilder::new("button")?
            .class("btn-secondary")
            .attr("type", "button")?
            .text(if database.loading { "Verificando..." } else { "Verificar novamente" })
            .disabled_if(database.loading)?
            .on_click(move |_| vm.recheck(SupabaseClient::new()))?
            .build();

        let banner = ElementBuilder::new("div")?
            .class("first-run-banner")
            .child(ElementBuilder::new("h3")?.text("Bem-vindo ao Dr. Memo!").build())?
            .child(
                ElementBuilder::new("p")?
                    .text("Ainda não há dados cadastrados. Comece adicionando seus remédios e consultas.")
                    .build(),
            )?
            .child(recheck)?
            .build();
        append_child(&section, &banner)?;
    }

    Ok(section)
}

fn render_more(state: &AppState, auth: &AppAuth) -> Result<Element, JsValue> {
    let section = screen(Tab::More)?;

    if state.auth.snapshot().is_admin {
        let router = state.router.clone();
        let admin = ElementBuilder::new("button")?
            .class("btn-secondary")
            .attr("type", "button")?
            .text("Painel administrativo")
            .on_click(move |_| router.navigate(Route::Admin))?
            .build();
        append_child(&section, &admin)?;
    }

    let auth = auth.clone();
    let sign_out = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text("Sair")
        .on_click(move |_| {
            let auth = auth.clone();
            spawn_local(async move { auth.sign_out().await });
        })?
        .build();
    append_child(&section, &sign_out)?;

    Ok(section)
}
