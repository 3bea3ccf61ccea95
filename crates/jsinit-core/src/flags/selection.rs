//! Resolved feature selection

use super::toggle::{FeatureToggle, ToggleState};
use std::collections::BTreeMap;

/// Final output of flag resolution: where to provision, and what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRecord {
    target_path: String,
    toggles: BTreeMap<FeatureToggle, ToggleState>,
}

impl SelectionRecord {
    /// Target path exactly as given, apart from trimming
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn state(&self, toggle: FeatureToggle) -> &ToggleState {
        // Every toggle is inserted by `SelectionBuilder::finish`
        self.toggles.get(&toggle).unwrap_or(&ToggleState::Disabled)
    }

    pub fn is_enabled(&self, toggle: FeatureToggle) -> bool {
        self.state(toggle).enabled()
    }

    pub fn config_path(&self, toggle: FeatureToggle) -> Option<&str> {
        self.state(toggle).config_path()
    }

    /// All toggles with their states, in catalogue order
    pub fn toggles(&self) -> impl Iterator<Item = (FeatureToggle, &ToggleState)> {
        self.toggles.iter().map(|(t, s)| (*t, s))
    }

    pub fn enabled_toggles(&self) -> impl Iterator<Item = FeatureToggle> + '_ {
        self.toggles().filter(|(_, s)| s.enabled()).map(|(t, _)| t)
    }
}

/// Accumulates explicit flag observations before defaults are applied
#[derive(Debug, Default)]
pub struct SelectionBuilder {
    observed: BTreeMap<FeatureToggle, Option<String>>,
}

impl SelectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a toggle flag. A later observation of the same toggle
    /// replaces an earlier one.
    pub fn observe(mut self, toggle: FeatureToggle, config_path: Option<String>) -> Self {
        self.observed.insert(toggle, config_path);
        self
    }

    pub fn any_observed(&self) -> bool {
        !self.observed.is_empty()
    }

    /// Apply default enablement and produce the record.
    ///
    /// With no toggle flags at all, every toggle is enabled with a
    /// generated config. Once any toggle flag is present, only the
    /// named toggles are enabled.
    pub fn finish(self, target_path: String) -> SelectionRecord {
        let opt_in = self.any_observed();
        let mut observed = self.observed;

        let toggles = FeatureToggle::ALL
            .into_iter()
            .map(|toggle| {
                let state = match observed.remove(&toggle) {
                    Some(config_path) => ToggleState::enabled_with(config_path),
                    None if opt_in => ToggleState::Disabled,
                    None => ToggleState::Generate,
                };
                (toggle, state)
            })
            .collect();

        SelectionRecord {
            target_path,
            toggles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_enables_everything() {
        let record = SelectionBuilder::new().finish("app".to_string());
        for (toggle, state) in record.toggles() {
            assert_eq!(
                state,
                &ToggleState::Generate,
                "{} should be enabled",
                toggle
            );
        }
        assert_eq!(record.toggles().count(), 5);
    }

    #[test]
    fn test_one_flag_switches_to_opt_in() {
        let record = SelectionBuilder::new()
            .observe(FeatureToggle::Jest, None)
            .finish("app".to_string());

        assert_eq!(record.state(FeatureToggle::Jest), &ToggleState::Generate);
        assert_eq!(
            record.enabled_toggles().collect::<Vec<_>>(),
            vec![FeatureToggle::Jest]
        );
        assert_eq!(record.toggles().count(), 5);
    }

    #[test]
    fn test_last_observation_wins() {
        let record = SelectionBuilder::new()
            .observe(FeatureToggle::Eslint, Some("first".to_string()))
            .observe(FeatureToggle::Eslint, None)
            .finish("app".to_string());
        assert_eq!(record.state(FeatureToggle::Eslint), &ToggleState::Generate);

        let record = SelectionBuilder::new()
            .observe(FeatureToggle::Eslint, None)
            .observe(FeatureToggle::Eslint, Some("second".to_string()))
            .finish("app".to_string());
        assert_eq!(record.config_path(FeatureToggle::Eslint), Some("second"));
    }
}
