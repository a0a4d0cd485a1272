// ============================================================================
// NAVIGATION VIEWMODEL - Máquina de estados de las pestañas
// ============================================================================

use crate::state::Observable;

/// Pestañas de la barra inferior (conjunto cerrado)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    Meds,
    Appointments,
    Contacts,
    More,
}

impl Tab {
    /// Orden de la barra de navegación
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Meds, Tab::Appointments, Tab::Contacts, Tab::More];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Meds => "meds",
            Tab::Appointments => "appointments",
            Tab::Contacts => "contacts",
            Tab::More => "more",
        }
    }

    /// Ids desconocidos caen en `Home`
    pub fn from_id(id: &str) -> Self {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == id)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Início",
            Tab::Meds => "Remédios",
            Tab::Appointments => "Consultas",
            Tab::Contacts => "Contatos",
            Tab::More => "Mais",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Meds => "💊",
            Tab::Appointments => "📅",
            Tab::Contacts => "📞",
            Tab::More => "☰",
        }
    }
}

/// Estado de la pestaña activa (no persistido: recarga = Home)
#[derive(Clone)]
pub struct NavigationViewModel {
    selected: Observable<Tab>,
}

impl NavigationViewModel {
    pub fn new(selected: Observable<Tab>) -> Self {
        Self { selected }
    }

    pub fn active(&self) -> Tab {
        self.selected.get()
    }

    pub fn select_tab(&self, tab: Tab) {
        if self.active() == tab {
            return;
        }
        log::debug!("🗂️ [NAV] Pestaña {} → {}", self.active().id(), tab.id());
        self.selected.set(tab);
    }

    pub fn select_tab_by_id(&self, id: &str) {
        self.select_tab(Tab::from_id(id));
    }

    /// Volver al estado inicial (al desmontar el shell, p.ej. logout)
    pub fn reset(&self) {
        self.select_tab(Tab::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn viewmodel() -> NavigationViewModel {
        NavigationViewModel::new(Observable::new(Tab::default()))
    }

    #[test]
    fn initial_tab_is_home() {
        assert_eq!(viewmodel().active(), Tab::Home);
    }

    #[test]
    fn select_tab_is_immediate_and_tracks_last_selection() {
        let nav = viewmodel();
        nav.select_tab_by_id("meds");
        assert_eq!(nav.active(), Tab::Meds);
        nav.select_tab(Tab::Contacts);
        assert_eq!(nav.active(), Tab::Contacts);
    }

    #[test]
    fn unknown_id_falls_back_to_home() {
        let nav = viewmodel();
        nav.select_tab(Tab::More);
        nav.select_tab_by_id("settings");
        assert_eq!(nav.active(), Tab::Home);
    }

    #[test]
    fn reselecting_active_tab_does_not_rerender() {
        let selected = Observable::new(Tab::Home);
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            selected.subscribe(move || renders.set(renders.get() + 1));
        }
        let nav = NavigationViewModel::new(selected);
        nav.select_tab(Tab::Meds);
        nav.select_tab(Tab::Meds);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), tab);
        }
    }
}
