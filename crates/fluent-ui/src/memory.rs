//! Widget memory for state that outlives a single frame
//!
//! Immediate-mode components are rebuilt every frame, so anything that has
//! to persist (a flyout's visibility animation, the element that held focus
//! before a popup opened) lives here, keyed by a [`WidgetStateId`].

use std::any::Any;
use std::collections::HashMap;

/// Unique identifier for widget state storage
///
/// This is typically derived from the widget's ID and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetStateId(String);

impl WidgetStateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a widget state ID with a type suffix
    ///
    /// Lets one widget keep several independent states.
    pub fn with_suffix(id: impl Into<String>, suffix: &str) -> Self {
        Self(format!("{}_{}", id.into(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for WidgetStateId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// Type-erased per-widget state that persists across frames
///
/// Each id should always be used with the same state type.
pub struct WidgetMemory {
    states: HashMap<WidgetStateId, Box<dyn Any>>,
}

impl WidgetMemory {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Get or create state for a widget
    ///
    /// If state doesn't exist for this ID, creates it using the provided default.
    /// A stored value of a different type is replaced.
    pub fn get_or_insert<T: 'static>(
        &mut self,
        id: impl Into<WidgetStateId>,
        default: T,
    ) -> &mut T {
        let id = id.into();
        let slot = self
            .states
            .entry(id)
            .or_insert_with(|| Box::new(()) as Box<dyn Any>);
        if !slot.is::<T>() {
            *slot = Box::new(default);
        }
        slot.downcast_mut::<T>()
            .expect("slot was just filled with a value of this type")
    }

    pub fn get_or_default<T: Default + 'static>(&mut self, id: impl Into<WidgetStateId>) -> &mut T {
        self.get_or_insert(id, T::default())
    }

    /// Store state, replacing whatever was there
    pub fn insert<T: 'static>(&mut self, id: impl Into<WidgetStateId>, state: T) {
        self.states.insert(id.into(), Box::new(state));
    }

    pub fn get<T: 'static>(&self, id: impl Into<WidgetStateId>) -> Option<&T> {
        self.states
            .get(&id.into())
            .and_then(|s| s.downcast_ref::<T>())
    }

    pub fn get_mut<T: 'static>(&mut self, id: impl Into<WidgetStateId>) -> Option<&mut T> {
        self.states
            .get_mut(&id.into())
            .and_then(|s| s.downcast_mut::<T>())
    }

    pub fn contains(&self, id: impl Into<WidgetStateId>) -> bool {
        self.states.contains_key(&id.into())
    }

    /// Remove state for a widget, returning whether anything was stored
    pub fn remove(&mut self, id: impl Into<WidgetStateId>) -> bool {
        self.states.remove(&id.into()).is_some()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for WidgetMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetMemory")
            .field("num_states", &self.states.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Counter(u32);

    #[test]
    fn test_state_persists() {
        let mut memory = WidgetMemory::new();
        assert!(memory.is_empty());

        memory.get_or_default::<Counter>("flyout").0 += 1;
        memory.get_or_default::<Counter>("flyout").0 += 1;

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.get::<Counter>("flyout"), Some(&Counter(2)));
    }

    #[test]
    fn test_wrong_type_returns_none() {
        let mut memory = WidgetMemory::new();
        memory.insert("a", Counter(1));
        memory.insert("b", true);

        assert!(memory.get::<bool>("a").is_none());
        assert!(memory.get::<Counter>("b").is_none());
    }

    #[test]
    fn test_get_or_insert_replaces_mismatched_type() {
        let mut memory = WidgetMemory::new();
        memory.insert("a", true);
        assert_eq!(*memory.get_or_insert("a", Counter(7)), Counter(7));
    }

    #[test]
    fn test_suffix_ids_are_distinct() {
        let mut memory = WidgetMemory::new();
        memory.insert(WidgetStateId::with_suffix("menu", "popup"), Counter(1));
        memory.insert(WidgetStateId::with_suffix("menu", "visibility"), Counter(2));
        assert_eq!(memory.len(), 2);
        assert!(memory.remove(WidgetStateId::with_suffix("menu", "popup")));
        assert!(!memory.contains("menu_popup"));
    }
}
