//! Process-wide registry of named decorations.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use super::{styles, Decoration};

static REGISTRY: Lazy<Mutex<HashMap<String, Decoration>>> = Lazy::new(|| {
    Mutex::new(
        styles::builtin()
            .into_iter()
            .map(|(name, decoration)| (name.to_string(), decoration))
            .collect(),
    )
});

/// Registers `decoration` under `name`, replacing any earlier entry.
///
/// The decoration is populated first unless it is boxless.
pub fn register_decoration(name: impl Into<String>, decoration: Decoration) {
    let name = name.into();
    log::debug!("registering decoration {:?}", name);
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if registry.insert(name.clone(), decoration.populated()).is_some() {
        log::warn!("decoration {:?} replaced", name);
    }
}

/// Every registered decoration name, sorted.
pub fn registered_decoration_names() -> Vec<String> {
    let registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    let mut names: Vec<String> = registry.keys().cloned().collect();
    names.sort();
    names
}

/// The decoration registered as `name`, or the empty decoration.
pub fn named(name: &str) -> Decoration {
    let registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    registry.get(name).cloned().unwrap_or_default()
}
