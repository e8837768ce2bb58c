use crate::{Category, Machine};

/// Sub-filter of a category, matched by keywords in the raw muscle labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl MuscleGroup {
    /// Keywords are lower case, labels are compared case-insensitively.
    #[must_use]
    pub fn matches(&self, machine: &Machine) -> bool {
        machine.muscles_worked.iter().any(|label| {
            let label = label.to_lowercase();
            self.keywords.iter().any(|keyword| label.contains(keyword))
        })
    }
}

const fn group(
    id: &'static str,
    label: &'static str,
    keywords: &'static [&'static str],
) -> MuscleGroup {
    MuscleGroup {
        id,
        label,
        keywords,
    }
}

const LEGS: &[MuscleGroup] = &[
    group("quadriceps", "Quadriceps", &["quadriceps", "front thighs"]),
    group("hamstrings", "Hamstrings", &["hamstrings", "back thighs"]),
    group("glutes", "Glutes", &["glutes", "gluteus", "buttocks"]),
    group("calves", "Calves", &["calves", "gastrocnemius", "soleus"]),
    group(
        "hip-abductors",
        "Hip Abductors",
        &["abductors", "outer thighs"],
    ),
    group(
        "hip-adductors",
        "Hip Adductors",
        &["adductors", "inner thighs"],
    ),
];

const CHEST: &[MuscleGroup] = &[
    group(
        "upper-chest",
        "Upper Chest",
        &["upper chest", "upper pectorals"],
    ),
    group(
        "lower-chest",
        "Lower Chest",
        &["lower chest", "lower pectorals"],
    ),
    group(
        "full-chest",
        "Full Chest",
        &["chest", "pectoralis", "pectorals"],
    ),
];

const BACK: &[MuscleGroup] = &[
    group("lats", "Lats", &["lats", "latissimus"]),
    group(
        "middle-back",
        "Middle Back",
        &["rhomboids", "traps", "trapezius"],
    ),
    group(
        "lower-back",
        "Lower Back",
        &["lower back", "erector spinae"],
    ),
];

const SHOULDERS: &[MuscleGroup] = &[
    group(
        "front-delts",
        "Front Delts",
        &["front deltoid", "anterior deltoid"],
    ),
    group(
        "side-delts",
        "Side Delts",
        &["lateral deltoid", "side deltoid"],
    ),
    group(
        "rear-delts",
        "Rear Delts",
        &["rear deltoid", "posterior deltoid"],
    ),
];

const ARMS: &[MuscleGroup] = &[
    group("biceps", "Biceps", &["biceps", "brachialis"]),
    group("triceps", "Triceps", &["triceps"]),
    group("forearms", "Forearms", &["forearms", "wrist"]),
];

const CORE: &[MuscleGroup] = &[
    group("abs", "Abs", &["rectus abdominis", "abs"]),
    group("obliques", "Obliques", &["obliques", "side abs"]),
    group(
        "lower-back",
        "Lower Back",
        &["erector spinae", "lower back"],
    ),
];

#[must_use]
pub fn muscle_groups(category: Category) -> &'static [MuscleGroup] {
    match category {
        Category::Legs => LEGS,
        Category::Chest => CHEST,
        Category::Back => BACK,
        Category::Shoulders => SHOULDERS,
        Category::Arms => ARMS,
        Category::Core => CORE,
        Category::Cardio => &[],
    }
}

#[must_use]
pub fn muscle_group(category: Category, label: &str) -> Option<&'static MuscleGroup> {
    muscle_groups(category).iter().find(|g| g.label == label)
}

#[must_use]
pub fn machine_matches_muscle_group(machine: &Machine, label: &str, category: Category) -> bool {
    muscle_group(category, label).is_some_and(|group| group.matches(machine))
}

/// Introduction and suggested machine order shown when browsing a category.
#[derive(Debug, PartialEq, Eq)]
pub struct MuscleGroupInfo {
    pub category: Category,
    pub name: &'static str,
    pub intro: &'static str,
    pub recommended_order: &'static [&'static str],
}

impl MuscleGroupInfo {
    /// Machines of the category or tagged with it, in recommended order.
    ///
    /// Machines missing from the recommended order follow in catalog order.
    #[must_use]
    pub fn machines<'a>(
        &self,
        machines: impl IntoIterator<Item = &'a Machine>,
    ) -> Vec<&'a Machine> {
        let mut result = machines
            .into_iter()
            .filter(|m| m.category == self.category || m.has_tag(self.category.id()))
            .collect::<Vec<_>>();
        result.sort_by_key(|m| {
            self.recommended_order
                .iter()
                .position(|id| *id == m.id.as_str())
                .unwrap_or(usize::MAX)
        });
        result
    }
}

impl Category {
    #[must_use]
    pub fn info(self) -> &'static MuscleGroupInfo {
        match self {
            Category::Legs => &LEGS_INFO,
            Category::Chest => &CHEST_INFO,
            Category::Back => &BACK_INFO,
            Category::Shoulders => &SHOULDERS_INFO,
            Category::Arms => &ARMS_INFO,
            Category::Core => &CORE_INFO,
            Category::Cardio => &CARDIO_INFO,
        }
    }
}

static LEGS_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Legs,
    name: "Legs",
    intro: "Your legs contain the largest and strongest muscles in your body. \
            Training them helps with everyday activities like walking, climbing stairs, \
            and standing up. Strong legs also boost your metabolism because these big \
            muscles burn more calories.",
    recommended_order: &[
        "smith-machine-squat",
        "leg-press",
        "hack-squat",
        "leg-extension",
        "leg-curl",
        "hip-abductor",
        "hip-adductor",
        "calf-raise",
    ],
};

static CHEST_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Chest,
    name: "Chest",
    intro: "Your chest muscles (pectorals) are used whenever you push something away \
            from your body. Training your chest helps with pushing doors, lifting objects, \
            and improving your upper body posture. These machines guide the movement so \
            you can focus on building strength safely.",
    recommended_order: &[
        "chest-press",
        "incline-chest-press",
        "decline-chest-press",
        "pec-deck",
        "cable-crossover",
    ],
};

static BACK_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Back,
    name: "Back",
    intro: "Your back is made up of several muscle groups that work together to pull \
            things toward you and keep you standing upright. A strong back improves your \
            posture, reduces back pain, and balances out chest training. These are some \
            of the most important muscles to train.",
    recommended_order: &[
        "lat-pulldown",
        "assisted-pull-up",
        "seated-cable-row",
        "t-bar-row",
        "back-extension",
    ],
};

static SHOULDERS_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Shoulders,
    name: "Shoulders",
    intro: "Your shoulder muscles (deltoids) surround your shoulder joint and help you \
            lift your arms in all directions. Strong shoulders make everyday reaching and \
            lifting easier, and they help protect your shoulder joints from injury.",
    recommended_order: &[
        "shoulder-press",
        "lateral-raise-machine",
        "reverse-fly-machine",
        "cable-face-pull",
    ],
};

static ARMS_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Arms,
    name: "Arms",
    intro: "Your arms include biceps (front) and triceps (back). Biceps help you pull \
            and curl things toward you, while triceps help you push things away. Most \
            people want to train arms, and these machines make it easy to isolate each \
            muscle safely.",
    recommended_order: &[
        "cable-bicep-curl",
        "preacher-curl",
        "tricep-pushdown",
        "cable-tricep-extension",
    ],
};

static CORE_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Core,
    name: "Core",
    intro: "Your core includes your abs, obliques, and lower back muscles. These \
            muscles stabilize your entire body during every movement you make. A strong \
            core helps prevent injuries, improves balance, and supports good posture \
            throughout the day.",
    recommended_order: &[
        "ab-crunch-machine",
        "cable-woodchop",
        "captains-chair",
        "core-back-extension",
    ],
};

static CARDIO_INFO: MuscleGroupInfo = MuscleGroupInfo {
    category: Category::Cardio,
    name: "Cardio",
    intro: "Cardiovascular exercise strengthens your heart and lungs, burns calories, \
            and improves your endurance. These machines let you do cardio indoors at your \
            own pace. Start slow and gradually increase intensity as your fitness improves.",
    recommended_order: &[
        "treadmill",
        "elliptical",
        "stationary-bike",
        "rowing-machine",
        "stair-climber",
    ],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Property, machine::tests::machine};

    #[rstest]
    #[case(Category::Legs, &["Quadriceps", "Hamstrings", "Glutes", "Calves", "Hip Abductors", "Hip Adductors"])]
    #[case(Category::Chest, &["Upper Chest", "Lower Chest", "Full Chest"])]
    #[case(Category::Back, &["Lats", "Middle Back", "Lower Back"])]
    #[case(Category::Shoulders, &["Front Delts", "Side Delts", "Rear Delts"])]
    #[case(Category::Arms, &["Biceps", "Triceps", "Forearms"])]
    #[case(Category::Core, &["Abs", "Obliques", "Lower Back"])]
    #[case(Category::Cardio, &[])]
    fn test_muscle_groups(#[case] category: Category, #[case] expected: &[&str]) {
        assert_eq!(
            muscle_groups(category)
                .iter()
                .map(|g| g.label)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_muscle_groups_unique_ids() {
        for category in Category::iter() {
            let mut ids = HashSet::new();

            for group in muscle_groups(*category) {
                assert!(ids.insert(group.id), "duplicate group {}", group.id);
                assert!(!group.keywords.is_empty());
                assert!(
                    group
                        .keywords
                        .iter()
                        .all(|k| *k == k.to_lowercase().as_str())
                );
            }
        }
    }

    #[rstest]
    #[case(&["Glutes (Buttocks)"], "Glutes", Category::Legs, true)]
    #[case(&["Gluteus Maximus"], "Glutes", Category::Legs, true)]
    #[case(&["Quadriceps (Front Thighs)"], "Glutes", Category::Legs, false)]
    #[case(&["Hip Adductors (Inner Thighs)"], "Hip Adductors", Category::Legs, true)]
    #[case(&["Hip Adductors (Inner Thighs)"], "Hip Abductors", Category::Legs, false)]
    #[case(&["Upper Chest (Upper Pectorals)"], "Upper Chest", Category::Chest, true)]
    #[case(&["Upper Chest (Upper Pectorals)"], "Full Chest", Category::Chest, true)]
    #[case(&["Chest (Pectoralis Major)"], "Lower Chest", Category::Chest, false)]
    #[case(&["Side Shoulders (Lateral Deltoids)"], "Side Delts", Category::Shoulders, true)]
    #[case(&["Glutes (Buttocks)"], "Glutes", Category::Chest, false)]
    #[case(&["Glutes (Buttocks)"], "Butt", Category::Legs, false)]
    #[case(&["Heart"], "Abs", Category::Cardio, false)]
    fn test_machine_matches_muscle_group(
        #[case] muscles: &[&str],
        #[case] label: &str,
        #[case] category: Category,
        #[case] expected: bool,
    ) {
        let machine = machine("machine", "Machine", category, muscles);

        assert_eq!(
            machine_matches_muscle_group(&machine, label, category),
            expected
        );
    }

    #[test]
    fn test_muscle_group() {
        assert_eq!(
            muscle_group(Category::Back, "Lats").map(|g| g.id),
            Some("lats")
        );
        assert_eq!(muscle_group(Category::Back, "lats"), None);
        assert_eq!(muscle_group(Category::Cardio, "Lats"), None);
    }

    #[test]
    fn test_category_info() {
        for category in Category::iter() {
            let info = category.info();

            assert_eq!(info.category, *category);
            assert_eq!(info.name, category.name());
            assert!(!info.intro.is_empty());
            assert!(!info.intro.contains("  "));

            let ids = info.recommended_order.iter().collect::<HashSet<_>>();
            assert_eq!(ids.len(), info.recommended_order.len());
        }
    }

    #[test]
    fn test_muscle_group_info_machines() {
        let mut core_tagged = machine("kettlebell-swing", "Kettlebell Swing", Category::Legs, &[]);
        core_tagged.tags = vec!["core".to_string()];
        let machines = [
            machine("plank-station", "Plank Station", Category::Core, &[]),
            machine("leg-press", "Leg Press", Category::Legs, &[]),
            machine("cable-woodchop", "Cable Woodchop", Category::Core, &[]),
            core_tagged,
            machine(
                "ab-crunch-machine",
                "Ab Crunch Machine",
                Category::Core,
                &[],
            ),
            machine("captains-chair", "Captain's Chair", Category::Core, &[]),
        ];

        assert_eq!(
            Category::Core
                .info()
                .machines(&machines)
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>(),
            vec![
                "ab-crunch-machine",
                "cable-woodchop",
                "captains-chair",
                "plank-station",
                "kettlebell-swing",
            ]
        );
    }

    #[test]
    fn test_muscle_group_info_machines_empty() {
        let machines = [machine("leg-press", "Leg Press", Category::Legs, &[])];

        assert!(Category::Cardio.info().machines(&machines).is_empty());
    }
}
