use std::slice::Iter;

use derive_more::{Deref, Display};

use crate::{ActivationMap, ActivationScheme, Name, Property, ReadError, resolve};

#[allow(async_fn_in_trait)]
pub trait MachineService {
    async fn get_machines(&self) -> Result<Vec<Machine>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait MachineRepository {
    async fn read_machines(&self) -> Result<Vec<Machine>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub id: MachineID,
    pub name: Name,
    pub category: Category,
    pub difficulty: Difficulty,
    pub short_description: String,
    /// Ordered by decreasing involvement, the primary mover comes first.
    pub muscles_worked: Vec<String>,
    pub tags: Vec<String>,
    pub steps: Vec<String>,
    pub safety_warnings: Vec<String>,
    pub suggested_sets: String,
    pub youtube_video_id: Option<String>,
}

impl Machine {
    #[must_use]
    pub fn activation(&self, scheme: ActivationScheme) -> ActivationMap {
        resolve(&self.muscles_worked, scheme)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MachineID(String);

impl From<&str> for MachineID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MachineID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Legs,
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Cardio,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 7] = [
            Category::Legs,
            Category::Chest,
            Category::Back,
            Category::Shoulders,
            Category::Arms,
            Category::Core,
            Category::Cardio,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Legs => "Legs",
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Shoulders => "Shoulders",
            Category::Arms => "Arms",
            Category::Core => "Core",
            Category::Cardio => "Cardio",
        }
    }
}

impl Category {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Category::Legs => "legs",
            Category::Chest => "chest",
            Category::Back => "back",
            Category::Shoulders => "shoulders",
            Category::Arms => "arms",
            Category::Core => "core",
            Category::Cardio => "cardio",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::iter()
            .find(|c| c.id() == value)
            .copied()
            .ok_or_else(|| CategoryError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Unknown category \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl Difficulty {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Difficulty::iter()
            .find(|d| d.id() == value)
            .copied()
            .ok_or_else(|| DifficultyError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Unknown difficulty \"{0}\"")]
    Unknown(String),
}
