use serde_json::Value;
use std::collections::HashMap;

use crate::shared::list::FilterState;

/// FilterStateStore keeps dashboard filter states across dashboard switches
/// States are stored in memory only and are lost on reload
#[derive(Clone, Debug, Default)]
pub struct FilterStateStore {
    states: HashMap<String, Value>,
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Get the raw state for a specific dashboard
    pub fn get_state(&self, dashboard_key: &str) -> Option<&Value> {
        self.states.get(dashboard_key)
    }

    /// Set the raw state for a specific dashboard
    pub fn set_state(&mut self, dashboard_key: impl Into<String>, state: Value) {
        self.states.insert(dashboard_key.into(), state);
    }

    /// Сохранить фильтр дашборда
    pub fn save(&mut self, dashboard_key: &str, filter: &FilterState) {
        match serde_json::to_value(filter) {
            Ok(value) => self.set_state(dashboard_key, value),
            Err(e) => tracing::warn!("Failed to snapshot filter for {}: {}", dashboard_key, e),
        }
    }

    /// Восстановить фильтр дашборда; повреждённое значение отбрасывается
    pub fn load(&self, dashboard_key: &str) -> Option<FilterState> {
        let value = self.states.get(dashboard_key)?;
        match serde_json::from_value(value.clone()) {
            Ok(filter) => Some(filter),
            Err(e) => {
                tracing::warn!("Ignoring stored filter for {}: {}", dashboard_key, e);
                None
            }
        }
    }

    /// Remove the state for a specific dashboard
    pub fn remove_state(&mut self, dashboard_key: &str) {
        self.states.remove(dashboard_key);
    }

    /// Clear all states
    pub fn clear_all(&mut self) {
        self.states.clear();
    }
}
