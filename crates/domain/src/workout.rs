use std::collections::BTreeMap;

use chrono::Duration;
use derive_more::{Deref, Display};

use crate::{
    ActivationMap, ActivationScheme, Difficulty, Machine, MachineID, Name, ReadError, merge_labels,
    resolve,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
}

/// Prebuilt workout routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub difficulty: Difficulty,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub exercises: Vec<WorkoutExercise>,
    pub tips: Vec<String>,
}

impl Workout {
    /// Muscle labels of all machines used, in order of first occurrence.
    #[must_use]
    pub fn muscles_worked(&self, machines: &BTreeMap<MachineID, Machine>) -> Vec<String> {
        merge_labels(
            self.exercises
                .iter()
                .filter_map(|e| machines.get(&e.machine_id))
                .map(|m| m.muscles_worked.as_slice()),
        )
    }

    #[must_use]
    pub fn activation(
        &self,
        machines: &BTreeMap<MachineID, Machine>,
        scheme: ActivationScheme,
    ) -> ActivationMap {
        resolve(&self.muscles_worked(machines), scheme)
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| u32::from(*e.sets)).sum()
    }

    #[must_use]
    pub fn rest(&self) -> Duration {
        self.exercises
            .iter()
            .map(|e| e.rest.duration() * i32::from(*e.sets))
            .sum()
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(String);

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub machine_id: MachineID,
    pub sets: Sets,
    pub reps: Reps,
    pub rest: Rest,
    pub notes: Option<String>,
}

#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u8);

impl Sets {
    pub const DEFAULT: Sets = Sets(3);

    pub fn new(value: u32) -> Result<Self, SetsError> {
        match u8::try_from(value) {
            Ok(sets @ 1..=10) => Ok(Self(sets)),
            _ => Err(SetsError::OutOfRange(value)),
        }
    }
}

impl Default for Sets {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 10 ({0})")]
    OutOfRange(u32),
}

/// Repetitions as free text, e.g. "10-12" or "30 sec".
#[derive(Deref, Display, Debug, Clone, PartialEq, Eq)]
pub struct Reps(String);

impl Reps {
    pub fn new(value: &str) -> Result<Self, RepsError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(RepsError::Empty);
        }

        let len = trimmed.chars().count();

        if len > 16 {
            return Err(RepsError::TooLong(len));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl Default for Reps {
    fn default() -> Self {
        Self("10-12".to_string())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must not be empty")]
    Empty,
    #[error("Reps must be 16 characters or fewer ({0} > 16)")]
    TooLong(usize),
}

/// Rest between sets in seconds.
#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rest(u16);

impl Rest {
    pub const DEFAULT: Rest = Rest(60);

    pub fn new(seconds: u32) -> Result<Self, RestError> {
        match u16::try_from(seconds) {
            Ok(seconds @ 0..=300) => Ok(Self(seconds)),
            _ => Err(RestError::OutOfRange(seconds)),
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::seconds(i64::from(self.0))
    }
}

impl Default for Rest {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RestError {
    #[error("Rest must be 300 seconds or less ({0} > 300)")]
    OutOfRange(u32),
}
