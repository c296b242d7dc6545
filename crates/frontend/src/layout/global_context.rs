use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Users,
    Products,
    Orders,
    Suppliers,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Users,
        Section::Products,
        Section::Orders,
        Section::Suppliers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Users => "users",
            Section::Products => "products",
            Section::Orders => "orders",
            Section::Suppliers => "suppliers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Users => "Users",
            Section::Products => "Products",
            Section::Orders => "Orders",
            Section::Suppliers => "Suppliers",
        }
    }

    pub fn icon(&self) -> &'static str {
        self.key()
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// `?active=orders` -> `Some(Section::Orders)`
pub fn section_from_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Section::from_key(key))
}

pub fn query_for(section: Section) -> String {
    let params = HashMap::from([("active".to_string(), section.key().to_string())]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Picks the section up from the URL and keeps the URL in sync after.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search) {
            self.active.set(section);
        }

        let active = self.active;
        Effect::new(move |_| {
            let new_url = query_for(active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open(&self, section: Section) {
        log::debug!("layout: open {}", section.key());
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        assert_eq!(query_for(Section::Orders), "?active=orders");
        assert_eq!(section_from_query("?active=suppliers"), Some(Section::Suppliers));
        assert_eq!(section_from_query("active=products&x=1"), Some(Section::Products));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        assert_eq!(section_from_query("?active=dashboard"), None);
        assert_eq!(section_from_query(""), None);
    }
}
