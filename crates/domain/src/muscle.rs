use std::{
    collections::{BTreeMap, HashSet},
    slice::Iter,
    sync::LazyLock,
};

use derive_more::Deref;
use log::warn;

use crate::Property;

/// Anatomical region drawn by the muscle diagram.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Region {
    // Chest
    Chest,
    ChestUpper,
    ChestLower,
    // Back
    Lats,
    Rhomboids,
    TrapsUpper,
    TrapsMiddle,
    LowerBack,
    // Shoulders
    Deltoids,
    DeltoidsFront,
    DeltoidsSide,
    DeltoidsRear,
    RotatorCuff,
    // Arms
    Biceps,
    Triceps,
    Forearms,
    // Core
    Abs,
    Obliques,
    HipFlexors,
    // Legs
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    HipAdductors,
    HipAbductors,
}

impl Property for Region {
    fn iter() -> Iter<'static, Region> {
        static REGIONS: [Region; 25] = [
            Region::Chest,
            Region::ChestUpper,
            Region::ChestLower,
            Region::Lats,
            Region::Rhomboids,
            Region::TrapsUpper,
            Region::TrapsMiddle,
            Region::LowerBack,
            Region::Deltoids,
            Region::DeltoidsFront,
            Region::DeltoidsSide,
            Region::DeltoidsRear,
            Region::RotatorCuff,
            Region::Biceps,
            Region::Triceps,
            Region::Forearms,
            Region::Abs,
            Region::Obliques,
            Region::HipFlexors,
            Region::Quads,
            Region::Hamstrings,
            Region::Glutes,
            Region::Calves,
            Region::HipAdductors,
            Region::HipAbductors,
        ];
        REGIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Region::Chest => "Chest",
            Region::ChestUpper => "Upper Chest",
            Region::ChestLower => "Lower Chest",
            Region::Lats => "Lats",
            Region::Rhomboids => "Rhomboids",
            Region::TrapsUpper => "Upper Traps",
            Region::TrapsMiddle => "Middle Traps",
            Region::LowerBack => "Lower Back",
            Region::Deltoids => "Deltoids",
            Region::DeltoidsFront => "Front Delts",
            Region::DeltoidsSide => "Side Delts",
            Region::DeltoidsRear => "Rear Delts",
            Region::RotatorCuff => "Rotator Cuff",
            Region::Biceps => "Biceps",
            Region::Triceps => "Triceps",
            Region::Forearms => "Forearms",
            Region::Abs => "Abs",
            Region::Obliques => "Obliques",
            Region::HipFlexors => "Hip Flexors",
            Region::Quads => "Quads",
            Region::Hamstrings => "Hamstrings",
            Region::Glutes => "Glutes",
            Region::Calves => "Calves",
            Region::HipAdductors => "Hip Adductors",
            Region::HipAbductors => "Hip Abductors",
        }
    }
}

impl Region {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Region::Chest => "chest",
            Region::ChestUpper => "chest-upper",
            Region::ChestLower => "chest-lower",
            Region::Lats => "lats",
            Region::Rhomboids => "rhomboids",
            Region::TrapsUpper => "traps-upper",
            Region::TrapsMiddle => "traps-middle",
            Region::LowerBack => "lower-back",
            Region::Deltoids => "deltoids",
            Region::DeltoidsFront => "deltoids-front",
            Region::DeltoidsSide => "deltoids-side",
            Region::DeltoidsRear => "deltoids-rear",
            Region::RotatorCuff => "rotator-cuff",
            Region::Biceps => "biceps",
            Region::Triceps => "triceps",
            Region::Forearms => "forearms",
            Region::Abs => "abs",
            Region::Obliques => "obliques",
            Region::HipFlexors => "hip-flexors",
            Region::Quads => "quads",
            Region::Hamstrings => "hamstrings",
            Region::Glutes => "glutes",
            Region::Calves => "calves",
            Region::HipAdductors => "hip-adductors",
            Region::HipAbductors => "hip-abductors",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ActivationLevel {
    Tertiary,
    Secondary,
    Primary,
}

impl Property for ActivationLevel {
    fn iter() -> Iter<'static, ActivationLevel> {
        static LEVELS: [ActivationLevel; 3] = [
            ActivationLevel::Primary,
            ActivationLevel::Secondary,
            ActivationLevel::Tertiary,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ActivationLevel::Primary => "Primary",
            ActivationLevel::Secondary => "Secondary",
            ActivationLevel::Tertiary => "Stabilizer",
        }
    }
}

/// Strategy for deriving an activation level from a label's position.
///
/// The tiered scheme distinguishes the primary mover (first label), synergists (second and third
/// label) and stabilizers (all further labels). The binary scheme only distinguishes targeted
/// from untargeted regions, every targeted region is reported as [`ActivationLevel::Primary`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ActivationScheme {
    Binary,
    #[default]
    Tiered,
}

impl ActivationScheme {
    /// Number of distinguishable levels, including "not targeted".
    #[must_use]
    pub fn levels(self) -> usize {
        match self {
            ActivationScheme::Binary => 2,
            ActivationScheme::Tiered => 4,
        }
    }

    #[must_use]
    pub fn level(self, position: usize) -> ActivationLevel {
        match self {
            ActivationScheme::Binary => ActivationLevel::Primary,
            ActivationScheme::Tiered => match position {
                0 => ActivationLevel::Primary,
                1..=2 => ActivationLevel::Secondary,
                _ => ActivationLevel::Tertiary,
            },
        }
    }
}

/// Highest activation level per region. Regions not contained are not targeted.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct ActivationMap(BTreeMap<Region, ActivationLevel>);

impl ActivationMap {
    #[must_use]
    pub fn level(&self, region: Region) -> Option<ActivationLevel> {
        self.0.get(&region).copied()
    }

    /// Highest level of any of the given regions.
    #[must_use]
    pub fn max_level(&self, regions: &[Region]) -> Option<ActivationLevel> {
        regions.iter().filter_map(|r| self.level(*r)).max()
    }

    pub fn raise(&mut self, region: Region, level: ActivationLevel) {
        self.0
            .entry(region)
            .and_modify(|l| *l = (*l).max(level))
            .or_insert(level);
    }
}

impl FromIterator<(Region, ActivationLevel)> for ActivationMap {
    fn from_iter<T: IntoIterator<Item = (Region, ActivationLevel)>>(iter: T) -> Self {
        let mut map = ActivationMap::default();
        for (region, level) in iter {
            map.raise(region, level);
        }
        map
    }
}

/// Resolve muscle labels, ordered by priority, into the activation of each region.
#[must_use]
pub fn resolve<S: AsRef<str>>(labels: &[S], scheme: ActivationScheme) -> ActivationMap {
    labels
        .iter()
        .enumerate()
        .flat_map(|(position, label)| {
            let level = scheme.level(position);
            regions(label.as_ref()).iter().map(move |r| (*r, level))
        })
        .collect()
}

/// Regions denoted by a muscle label. Unknown labels denote no region.
#[must_use]
pub fn regions(label: &str) -> &'static [Region] {
    if let Some(regions) = LABELS.get(&normalize(label)) {
        regions
    } else {
        if cfg!(debug_assertions) {
            warn!("no regions mapped for muscle label \"{label}\"");
        }
        &[]
    }
}

#[must_use]
pub fn is_known_label(label: &str) -> bool {
    LABELS.contains_key(&normalize(label))
}

/// Union of several label lists in order of first occurrence.
#[must_use]
pub fn merge_labels<'a>(lists: impl IntoIterator<Item = &'a [String]>) -> Vec<String> {
    let mut seen = HashSet::new();
    lists
        .into_iter()
        .flatten()
        .filter(|label| seen.insert(label.as_str()))
        .cloned()
        .collect()
}

fn normalize(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

static LABELS: LazyLock<BTreeMap<String, &'static [Region]>> = LazyLock::new(|| {
    LABEL_REGIONS
        .iter()
        .map(|(label, regions)| (normalize(label), *regions))
        .collect()
});

// Standardized names use the form "Common Name (Anatomical Clarification)". The legacy names are
// still used by parts of the catalog.
const LABEL_REGIONS: &[(&str, &[Region])] = &[
    // Legs
    ("Quadriceps (Front Thighs)", &[Region::Quads]),
    ("Hamstrings (Back Thighs)", &[Region::Hamstrings]),
    ("Glutes (Buttocks)", &[Region::Glutes]),
    ("Calves (Gastrocnemius & Soleus)", &[Region::Calves]),
    ("Hip Adductors (Inner Thighs)", &[Region::HipAdductors]),
    ("Hip Abductors (Outer Thighs)", &[Region::HipAbductors]),
    // Chest
    ("Chest (Pectoralis Major)", &[Region::Chest]),
    ("Upper Chest (Upper Pectorals)", &[Region::ChestUpper]),
    ("Lower Chest (Lower Pectorals)", &[Region::ChestLower]),
    // Back
    ("Lats (Latissimus Dorsi)", &[Region::Lats]),
    (
        "Middle Back (Rhomboids & Traps)",
        &[Region::Rhomboids, Region::TrapsMiddle],
    ),
    ("Lower Back (Erector Spinae)", &[Region::LowerBack]),
    (
        "Traps (Trapezius)",
        &[Region::TrapsUpper, Region::TrapsMiddle],
    ),
    // Shoulders
    (
        "Front Shoulders (Anterior Deltoids)",
        &[Region::DeltoidsFront],
    ),
    ("Side Shoulders (Lateral Deltoids)", &[Region::DeltoidsSide]),
    (
        "Rear Shoulders (Posterior Deltoids)",
        &[Region::DeltoidsRear],
    ),
    (
        "Rotator Cuff (Shoulder Stabilizers)",
        &[Region::RotatorCuff],
    ),
    // Arms
    ("Biceps (Front of Upper Arm)", &[Region::Biceps]),
    ("Triceps (Back of Upper Arm)", &[Region::Triceps]),
    (
        "Forearms (Brachioradialis & Wrist Flexors)",
        &[Region::Forearms],
    ),
    ("Brachialis (Elbow Flexor)", &[Region::Biceps]),
    // Core
    ("Abs (Rectus Abdominis)", &[Region::Abs]),
    ("Obliques (Side Abs)", &[Region::Obliques]),
    ("Deep Core (Transverse Abdominis)", &[Region::Abs]),
    ("Hip Flexors (Iliopsoas)", &[Region::HipFlexors]),
    // Cardio
    ("Cardiovascular System (Heart & Lungs)", &[]),
    // Legacy chest
    ("Chest (Pectorals)", &[Region::Chest]),
    ("Chest", &[Region::Chest]),
    // Legacy back
    ("Latissimus Dorsi", &[Region::Lats]),
    ("Middle Back (Rhomboids)", &[Region::Rhomboids]),
    ("Rhomboids", &[Region::Rhomboids]),
    ("Erector Spinae (Lower Back)", &[Region::LowerBack]),
    ("Erector Spinae", &[Region::LowerBack]),
    // Legacy shoulders
    ("Deltoids (Shoulders)", &[Region::Deltoids]),
    ("Front Deltoids", &[Region::DeltoidsFront]),
    ("Lateral Deltoids (Side Shoulders)", &[Region::DeltoidsSide]),
    ("Rear Deltoids", &[Region::DeltoidsRear]),
    ("Upper Trapezius", &[Region::TrapsUpper]),
    ("Middle Trapezius", &[Region::TrapsMiddle]),
    ("Trapezius", &[Region::TrapsUpper, Region::TrapsMiddle]),
    // Legacy arms
    ("Biceps", &[Region::Biceps]),
    ("Brachialis", &[Region::Biceps]),
    ("Brachioradialis", &[Region::Forearms]),
    ("Triceps", &[Region::Triceps]),
    ("Triceps (Long Head)", &[Region::Triceps]),
    ("Triceps (Medial Head)", &[Region::Triceps]),
    ("Forearms", &[Region::Forearms]),
    // Legacy core
    ("Rectus Abdominis (Six-Pack Muscles)", &[Region::Abs]),
    ("Rectus Abdominis", &[Region::Abs]),
    ("Rectus Abdominis (Lower Abs)", &[Region::Abs]),
    ("Obliques", &[Region::Obliques]),
    ("Transverse Abdominis", &[Region::Abs]),
    ("Core Stabilizers", &[Region::Abs, Region::Obliques]),
    ("Core", &[Region::Abs, Region::Obliques]),
    // Legacy legs
    ("Quadriceps", &[Region::Quads]),
    ("Hamstrings", &[Region::Hamstrings]),
    ("Glutes", &[Region::Glutes]),
    ("Gluteus Medius", &[Region::Glutes]),
    ("Calves", &[Region::Calves]),
    ("Calves (Gastrocnemius)", &[Region::Calves]),
    ("Gracilis", &[Region::HipAdductors]),
    // Generic labels, only used by cardio machines
    (
        "Legs",
        &[
            Region::Quads,
            Region::Hamstrings,
            Region::Glutes,
            Region::Calves,
        ],
    ),
    ("Arms", &[Region::Biceps, Region::Triceps]),
    (
        "Back",
        &[Region::Lats, Region::Rhomboids, Region::LowerBack],
    ),
    (
        "Shoulders",
        &[
            Region::DeltoidsFront,
            Region::DeltoidsSide,
            Region::DeltoidsRear,
        ],
    ),
    ("Heart & Lungs (Cardio)", &[]),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_region_id() {
        let mut ids = HashSet::new();

        for region in Region::iter() {
            let id = region.id();

            assert!(!id.is_empty());
            assert_eq!(id, id.to_lowercase());
            assert!(!ids.contains(id));

            ids.insert(id);
        }
    }

    #[test]
    fn test_region_name() {
        let mut names = HashSet::new();

        for region in Region::iter() {
            let name = region.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_activation_level_order() {
        assert!(ActivationLevel::Primary > ActivationLevel::Secondary);
        assert!(ActivationLevel::Secondary > ActivationLevel::Tertiary);
        assert!(Some(ActivationLevel::Tertiary) > None);
    }

    #[rstest]
    #[case(ActivationScheme::Tiered, 0, ActivationLevel::Primary)]
    #[case(ActivationScheme::Tiered, 1, ActivationLevel::Secondary)]
    #[case(ActivationScheme::Tiered, 2, ActivationLevel::Secondary)]
    #[case(ActivationScheme::Tiered, 3, ActivationLevel::Tertiary)]
    #[case(ActivationScheme::Tiered, 9, ActivationLevel::Tertiary)]
    #[case(ActivationScheme::Binary, 0, ActivationLevel::Primary)]
    #[case(ActivationScheme::Binary, 5, ActivationLevel::Primary)]
    fn test_activation_scheme_level(
        #[case] scheme: ActivationScheme,
        #[case] position: usize,
        #[case] expected: ActivationLevel,
    ) {
        assert_eq!(scheme.level(position), expected);
    }

    #[test]
    fn test_activation_scheme_levels() {
        assert_eq!(ActivationScheme::Binary.levels(), 2);
        assert_eq!(ActivationScheme::Tiered.levels(), 4);
        assert_eq!(ActivationScheme::default(), ActivationScheme::Tiered);
    }

    #[test]
    fn test_activation_map_raise() {
        let mut map = ActivationMap::default();

        map.raise(Region::Chest, ActivationLevel::Secondary);
        map.raise(Region::Chest, ActivationLevel::Tertiary);

        assert_eq!(map.level(Region::Chest), Some(ActivationLevel::Secondary));

        map.raise(Region::Chest, ActivationLevel::Primary);

        assert_eq!(map.level(Region::Chest), Some(ActivationLevel::Primary));
        assert_eq!(map.level(Region::Lats), None);
    }

    #[test]
    fn test_activation_map_max_level() {
        let map = ActivationMap::from_iter([
            (Region::Deltoids, ActivationLevel::Tertiary),
            (Region::DeltoidsFront, ActivationLevel::Secondary),
        ]);

        assert_eq!(
            map.max_level(&[Region::DeltoidsFront, Region::Deltoids]),
            Some(ActivationLevel::Secondary)
        );
        assert_eq!(map.max_level(&[Region::DeltoidsRear]), None);
        assert_eq!(map.max_level(&[]), None);
    }

    #[test]
    fn test_resolve_empty() {
        assert_eq!(
            resolve::<&str>(&[], ActivationScheme::Tiered),
            ActivationMap::default()
        );
        assert_eq!(
            resolve::<&str>(&[], ActivationScheme::Binary),
            ActivationMap::default()
        );
    }

    #[rstest]
    #[case::single(
        &["Quadriceps (Front Thighs)"],
        &[(Region::Quads, ActivationLevel::Primary)]
    )]
    #[case::legacy(
        &["Chest", "Triceps (Long Head)", "Front Deltoids"],
        &[
            (Region::Chest, ActivationLevel::Primary),
            (Region::Triceps, ActivationLevel::Secondary),
            (Region::DeltoidsFront, ActivationLevel::Secondary),
        ]
    )]
    #[case::stabilizers(
        &[
            "Lats (Latissimus Dorsi)",
            "Biceps (Front of Upper Arm)",
            "Rear Shoulders (Posterior Deltoids)",
            "Middle Back (Rhomboids & Traps)",
        ],
        &[
            (Region::Lats, ActivationLevel::Primary),
            (Region::Biceps, ActivationLevel::Secondary),
            (Region::DeltoidsRear, ActivationLevel::Secondary),
            (Region::Rhomboids, ActivationLevel::Tertiary),
            (Region::TrapsMiddle, ActivationLevel::Tertiary),
        ]
    )]
    #[case::no_downgrade(
        &["Traps (Trapezius)", "Upper Trapezius", "Biceps", "Middle Trapezius"],
        &[
            (Region::TrapsUpper, ActivationLevel::Primary),
            (Region::TrapsMiddle, ActivationLevel::Primary),
            (Region::Biceps, ActivationLevel::Secondary),
        ]
    )]
    #[case::upgrade(
        &["Glutes", "Hamstrings", "Quadriceps", "Legs"],
        &[
            (Region::Glutes, ActivationLevel::Primary),
            (Region::Hamstrings, ActivationLevel::Secondary),
            (Region::Quads, ActivationLevel::Secondary),
            (Region::Calves, ActivationLevel::Tertiary),
        ]
    )]
    #[case::duplicate(
        &["Abs (Rectus Abdominis)", "Obliques", "Hip Flexors (Iliopsoas)", "Abs (Rectus Abdominis)"],
        &[
            (Region::Abs, ActivationLevel::Primary),
            (Region::Obliques, ActivationLevel::Secondary),
            (Region::HipFlexors, ActivationLevel::Secondary),
        ]
    )]
    #[case::cardio(
        &["Cardiovascular System (Heart & Lungs)", "Legs"],
        &[
            (Region::Quads, ActivationLevel::Secondary),
            (Region::Hamstrings, ActivationLevel::Secondary),
            (Region::Glutes, ActivationLevel::Secondary),
            (Region::Calves, ActivationLevel::Secondary),
        ]
    )]
    #[case::unknown(
        &["Neck", "Biceps"],
        &[(Region::Biceps, ActivationLevel::Secondary)]
    )]
    fn test_resolve_tiered(
        #[case] labels: &[&str],
        #[case] expected: &[(Region, ActivationLevel)],
    ) {
        assert_eq!(
            resolve(labels, ActivationScheme::Tiered),
            ActivationMap(expected.iter().copied().collect())
        );
    }

    #[test]
    fn test_resolve_binary() {
        assert_eq!(
            resolve(
                &["Chest", "Triceps (Long Head)", "Front Deltoids", "Core"],
                ActivationScheme::Binary
            ),
            ActivationMap(BTreeMap::from([
                (Region::Chest, ActivationLevel::Primary),
                (Region::Triceps, ActivationLevel::Primary),
                (Region::DeltoidsFront, ActivationLevel::Primary),
                (Region::Abs, ActivationLevel::Primary),
                (Region::Obliques, ActivationLevel::Primary),
            ]))
        );
    }

    #[test]
    fn test_resolve_owned_labels() {
        let labels = vec!["Calves".to_string()];

        assert_eq!(
            resolve(&labels, ActivationScheme::Tiered).level(Region::Calves),
            Some(ActivationLevel::Primary)
        );
    }

    #[rstest]
    #[case(&["Legs", "Glutes", "Calves", "Hamstrings (Back Thighs)", "Quadriceps"])]
    #[case(&["Back", "Lats (Latissimus Dorsi)", "Rhomboids", "Lower Back (Erector Spinae)"])]
    #[case(&["Core", "Obliques", "Core Stabilizers", "Abs (Rectus Abdominis)", "Core"])]
    #[case(&["Shoulders", "Deltoids (Shoulders)", "Front Deltoids", "Rear Deltoids", "Arms"])]
    fn test_resolve_keeps_highest_level(#[case] labels: &[&str]) {
        for scheme in [ActivationScheme::Tiered, ActivationScheme::Binary] {
            let map = resolve(labels, scheme);

            for (position, label) in labels.iter().enumerate() {
                for region in regions(label) {
                    assert!(map.level(*region) >= Some(scheme.level(position)));
                }
            }

            for (region, level) in map.iter() {
                let implied = labels
                    .iter()
                    .enumerate()
                    .filter(|(_, label)| regions(label).contains(region))
                    .map(|(position, _)| scheme.level(position))
                    .max();
                assert_eq!(Some(*level), implied);
            }
        }
    }

    #[rstest]
    #[case("Quadriceps (Front Thighs)", &[Region::Quads])]
    #[case("  quadriceps   (front thighs) ", &[Region::Quads])]
    #[case("MIDDLE BACK (RHOMBOIDS & TRAPS)", &[Region::Rhomboids, Region::TrapsMiddle])]
    #[case("Heart & Lungs (Cardio)", &[])]
    #[case("Neck", &[])]
    #[case("", &[])]
    fn test_regions(#[case] label: &str, #[case] expected: &[Region]) {
        assert_eq!(regions(label), expected);
    }

    #[rstest]
    #[case("Cardiovascular System (Heart & Lungs)", true)]
    #[case("rear deltoids", true)]
    #[case("Rear Delts", false)]
    fn test_is_known_label(#[case] label: &str, #[case] expected: bool) {
        assert_eq!(is_known_label(label), expected);
    }

    #[test]
    fn test_label_regions_unique_keys() {
        let mut keys = HashSet::new();

        for (label, _) in LABEL_REGIONS {
            assert!(keys.insert(normalize(label)), "duplicate label {label:?}");
        }
    }

    #[test]
    fn test_label_regions_cover_all_regions() {
        let mapped = LABEL_REGIONS
            .iter()
            .flat_map(|(_, regions)| regions.iter())
            .collect::<HashSet<_>>();

        for region in Region::iter() {
            assert!(mapped.contains(region), "{region:?} not mapped");
        }
    }

    #[test]
    fn test_merge_labels() {
        let a = vec!["Chest".to_string(), "Triceps".to_string()];
        let b = vec!["Triceps".to_string(), "Front Deltoids".to_string()];
        let c = vec![];

        assert_eq!(
            merge_labels([a.as_slice(), b.as_slice(), c.as_slice()]),
            vec![
                "Chest".to_string(),
                "Triceps".to_string(),
                "Front Deltoids".to_string()
            ]
        );
    }
}
