use serde::{Deserialize, Serialize};

use super::registry::{IMAGE_TARGET, TEXT_TARGET, TargetRegistry};
use crate::filters::Mode;

pub const GLOBAL_SETTINGS_VERSION: &str = "1";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TargetSettings {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub version: String,
    pub targets: Vec<TargetSettings>,

    /// Targets selected at startup. `None` means every registered target;
    /// an empty list starts with nothing selected.
    pub selected_targets: Option<Vec<String>>,
    pub backdrop_mode: bool,
    pub copy_to_clipboard: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            version: GLOBAL_SETTINGS_VERSION.to_string(),
            targets: vec![
                TargetSettings {
                    id: TEXT_TARGET.to_string(),
                    label: "Text".to_string(),
                },
                TargetSettings {
                    id: IMAGE_TARGET.to_string(),
                    label: "Image".to_string(),
                },
            ],
            selected_targets: None,
            backdrop_mode: false,
            copy_to_clipboard: true,
        }
    }
}

impl GlobalSettings {
    pub fn mode(&self) -> Mode {
        Mode::from(self.backdrop_mode)
    }

    /// Builds the registry, skipping (and returning) rejected entries
    pub fn registry(&self) -> (TargetRegistry, Vec<String>) {
        let mut registry = TargetRegistry::new();
        let mut errors = vec![];

        for target in &self.targets {
            if let Err(err) = registry.register(&target.id, &target.label) {
                errors.push(err);
            }
        }

        (registry, errors)
    }

    /// The startup selection: the configured ids, or every registered target
    /// when no selection is configured
    pub fn initial_selection(&self, registry: &TargetRegistry) -> Vec<String> {
        match &self.selected_targets {
            Some(targets) => targets.clone(),
            None => registry.target_ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: GlobalSettings =
            serde_json::from_str(r#"{ "backdrop_mode": true }"#).unwrap();

        assert_eq!(settings.version, GLOBAL_SETTINGS_VERSION);
        assert_eq!(settings.mode(), Mode::Backdrop);
        assert_eq!(settings.targets.len(), 2);
        assert!(settings.copy_to_clipboard);
    }

    #[test]
    fn test_default_selection_is_every_target() {
        let settings = GlobalSettings::default();
        let (registry, errors) = settings.registry();

        assert!(errors.is_empty());
        assert_eq!(
            settings.initial_selection(&registry),
            vec![TEXT_TARGET.to_string(), IMAGE_TARGET.to_string()]
        );
    }

    #[test]
    fn test_duplicate_targets_are_reported() {
        let settings = GlobalSettings {
            targets: vec![
                TargetSettings {
                    id: "a".into(),
                    label: "A".into(),
                },
                TargetSettings {
                    id: "a".into(),
                    label: "Also A".into(),
                },
            ],
            selected_targets: Some(vec!["a".into()]),
            ..GlobalSettings::default()
        };

        let (registry, errors) = settings.registry();

        assert_eq!(registry.target_ids(), &["a"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(settings.initial_selection(&registry), vec!["a".to_string()]);
    }

    #[test]
    fn test_empty_selection_is_kept_empty() {
        let settings: GlobalSettings =
            serde_json::from_str(r#"{ "selected_targets": [] }"#).unwrap();
        let (registry, _) = settings.registry();

        assert_eq!(settings.selected_targets, Some(vec![]));
        assert!(settings.initial_selection(&registry).is_empty());

        let unset: GlobalSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(unset.initial_selection(&registry).len(), 2);
    }
}
