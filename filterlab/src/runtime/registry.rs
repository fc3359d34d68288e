use crate::core::util::HashMap;
use crate::filters::TargetId;

pub const TEXT_TARGET: &str = "FilterPreviewTextContainer";
pub const IMAGE_TARGET: &str = "FilterPreviewImageContainer";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetEntry {
    pub id: TargetId,
    pub label: String,
}

/// The preview targets the shell offers. The playground itself accepts any
/// target id; this only drives listing and the default selection.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    entries: HashMap<TargetId, TargetEntry>,
    ordered_ids: Vec<TargetId>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text and image previews every session starts with
    pub fn with_default_targets() -> Self {
        let mut registry = Self::new();
        for (id, label) in [(TEXT_TARGET, "Text"), (IMAGE_TARGET, "Image")] {
            let _ = registry.register(id, label);
        }
        registry
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("target id must not be empty".to_string());
        }
        if self.entries.contains_key(&id) {
            return Err(format!("duplicate target registration: {}", id));
        }

        self.ordered_ids.push(id.clone());
        self.entries.insert(
            id.clone(),
            TargetEntry {
                id,
                label: label.into(),
            },
        );

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TargetEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn label(&self, id: &str) -> Option<&str> {
        self.get(id).map(|entry| entry.label.as_str())
    }

    pub fn target_ids(&self) -> &[TargetId] {
        &self.ordered_ids
    }

    pub fn entries(&self) -> impl Iterator<Item = &TargetEntry> {
        self.ordered_ids.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_registers_and_lists_ids() {
        let mut registry = TargetRegistry::new();
        registry.register("a", "A").expect("register a");
        registry.register("b", "B").expect("register b");

        assert_eq!(registry.target_ids(), &["a", "b"]);
        assert_eq!(registry.label("b"), Some("B"));
        assert!(registry.contains("a"));
        assert!(!registry.contains("c"));
    }

    #[test]
    fn registry_rejects_duplicates() {
        let mut registry = TargetRegistry::new();
        registry.register("a", "A").expect("first register");

        let err = registry
            .register("a", "Again")
            .expect_err("duplicate target must fail");

        assert!(err.contains("duplicate target"));
        assert_eq!(registry.label("a"), Some("A"));
    }

    #[test]
    fn registry_rejects_blank_ids() {
        let mut registry = TargetRegistry::new();
        assert!(registry.register("  ", "Blank").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn default_targets_are_text_then_image() {
        let registry = TargetRegistry::with_default_targets();
        let labels: Vec<&str> =
            registry.entries().map(|e| e.label.as_str()).collect();

        assert_eq!(registry.target_ids(), &[TEXT_TARGET, IMAGE_TARGET]);
        assert_eq!(labels, vec!["Text", "Image"]);
    }
}
