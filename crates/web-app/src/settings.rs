use gymguide_domain::{
    ActivationMap, ActivationScheme, FilterScope, LegendEntry, Machine, MachineFilter,
    MuscleDiagram, legend,
};
use serde::{Deserialize, Serialize};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// User preferences. Fields missing in stored settings take their default value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "ActivationSchemeDef")]
    pub activation_scheme: ActivationScheme,
    pub show_view_toggle: bool,
    #[serde(with = "FilterScopeDef")]
    pub catalog_scope: FilterScope,
}

impl Settings {
    #[must_use]
    pub fn muscle_diagram(&self) -> MuscleDiagram {
        MuscleDiagram::new(self.show_view_toggle)
    }

    #[must_use]
    pub fn catalog_filter(&self) -> MachineFilter {
        MachineFilter::new(self.catalog_scope)
    }

    #[must_use]
    pub fn activation(&self, machine: &Machine) -> ActivationMap {
        machine.activation(self.activation_scheme)
    }

    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        legend(self.activation_scheme)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            activation_scheme: ActivationScheme::Tiered,
            show_view_toggle: true,
            catalog_scope: FilterScope::Catalog,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "ActivationScheme")]
enum ActivationSchemeDef {
    Binary,
    Tiered,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "FilterScope")]
enum FilterScopeDef {
    Catalog,
    Builder,
}

#[cfg(test)]
mod tests {
    use gymguide_domain::{ActivationLevel, Category, Difficulty, Name, Region, View};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.activation_scheme, ActivationScheme::Tiered);
        assert!(settings.show_view_toggle);
        assert_eq!(settings.catalog_scope, FilterScope::Catalog);
        assert_eq!(settings.muscle_diagram().view(), View::Front);
        assert!(settings.muscle_diagram().show_toggle());
        assert_eq!(settings.catalog_filter().scope, FilterScope::Catalog);
    }

    #[rstest]
    #[case(ActivationScheme::Binary, false, FilterScope::Builder)]
    #[case(ActivationScheme::Tiered, true, FilterScope::Catalog)]
    fn test_settings_serde(
        #[case] activation_scheme: ActivationScheme,
        #[case] show_view_toggle: bool,
        #[case] catalog_scope: FilterScope,
    ) {
        let settings = Settings {
            activation_scheme,
            show_view_toggle,
            catalog_scope,
        };
        let serialized = json!(settings);
        let deserialized: Settings = serde_json::from_value(serialized).unwrap();

        assert_eq!(deserialized, settings);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: Settings =
            serde_json::from_value(json!({ "activation_scheme": "Binary" })).unwrap();

        assert_eq!(
            settings,
            Settings {
                activation_scheme: ActivationScheme::Binary,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_settings_hidden_toggle() {
        let settings = Settings {
            show_view_toggle: false,
            ..Settings::default()
        };
        let mut diagram = settings.muscle_diagram();

        diagram.toggle_view();

        assert_eq!(diagram.view(), View::Front);
    }

    #[rstest]
    #[case(ActivationScheme::Tiered, Some(ActivationLevel::Secondary), 4)]
    #[case(ActivationScheme::Binary, Some(ActivationLevel::Primary), 2)]
    fn test_settings_activation_scheme(
        #[case] activation_scheme: ActivationScheme,
        #[case] triceps: Option<ActivationLevel>,
        #[case] legend_entries: usize,
    ) {
        let settings = Settings {
            activation_scheme,
            ..Settings::default()
        };
        let machine = Machine {
            id: "chest-press".into(),
            name: Name::new("Chest Press").unwrap(),
            category: Category::Chest,
            difficulty: Difficulty::Beginner,
            short_description: String::new(),
            muscles_worked: vec![
                "Chest (Pectoralis Major)".to_string(),
                "Triceps (Back of Upper Arm)".to_string(),
            ],
            tags: vec![],
            steps: vec![],
            safety_warnings: vec![],
            suggested_sets: String::new(),
            youtube_video_id: None,
        };
        let activation = settings.activation(&machine);

        assert_eq!(
            activation.level(Region::Chest),
            Some(ActivationLevel::Primary)
        );
        assert_eq!(activation.level(Region::Triceps), triceps);
        assert_eq!(settings.legend().len(), legend_entries);
    }
}
