use std::sync::RwLock;

/// The routing surface the session guard drives.
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> String;

    fn navigate(&self, route: &str);
}

/// Navigator that only tracks the current route and its history.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: RwLock<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            history: RwLock::new(vec![initial_route.into()]),
        }
    }

    /// Every route visited, oldest first, starting with the initial one
    pub fn history(&self) -> Vec<String> {
        self.history.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_route(&self) -> String {
        self.history
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn navigate(&self, route: &str) {
        self.history
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(route.to_string());
    }
}
