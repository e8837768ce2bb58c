use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use gloo_storage::{Storage as GlooStorage, errors::StorageError as GlooError};
use gymguide_domain as domain;
use gymguide_web_app::{Settings, SettingsRepository, log};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use uuid::Uuid;

/// Workout plans, settings and log entries in the browser's local storage.
pub struct LocalStorage;

#[derive(AsRefStr)]
enum Key {
    #[strum(serialize = "gym-app-workout-plans")]
    WorkoutPlans,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

fn read<T: DeserializeOwned>(key: &Key, default: T) -> Result<T, GlooError> {
    match gloo_storage::LocalStorage::get(key.as_ref()) {
        Ok(value) => Ok(value),
        Err(GlooError::KeyNotFound(_)) => Ok(default),
        Err(err) => Err(err),
    }
}

impl LocalStorage {
    fn read_plans() -> Result<Vec<WorkoutPlan>, domain::StorageError> {
        read(&Key::WorkoutPlans, vec![]).map_err(|err| domain::StorageError::Other(Box::new(err)))
    }

    fn write_plans(plans: &[WorkoutPlan]) -> Result<(), domain::StorageError> {
        match gloo_storage::LocalStorage::set(Key::WorkoutPlans.as_ref(), plans) {
            Ok(()) => Ok(()),
            Err(GlooError::JsError(_)) => Err(domain::StorageError::QuotaExceeded),
            Err(err) => Err(domain::StorageError::Other(Box::new(err))),
        }
    }
}

impl domain::WorkoutPlanRepository for LocalStorage {
    async fn read_workout_plans(&self) -> Result<Vec<domain::WorkoutPlan>, domain::ReadError> {
        let plans = Self::read_plans()?;
        Ok(plans
            .into_iter()
            .filter_map(|plan| {
                let id = plan.id;
                domain::WorkoutPlan::try_from(plan)
                    .inspect_err(|err| ::log::warn!("ignoring invalid workout plan {id}: {err}"))
                    .ok()
            })
            .collect())
    }

    async fn replace_workout_plan(
        &self,
        plan: domain::WorkoutPlan,
    ) -> Result<domain::WorkoutPlan, domain::UpdateError> {
        let stored = WorkoutPlan::try_from(&plan)
            .map_err(|err| domain::UpdateError::Other(Box::new(err)))?;
        let mut plans = Self::read_plans()?;
        plans.retain(|p| p.id != stored.id);
        plans.push(stored);
        Self::write_plans(&plans)?;
        Ok(plan)
    }

    async fn delete_workout_plan(
        &self,
        id: domain::PlanID,
    ) -> Result<domain::PlanID, domain::DeleteError> {
        let mut plans = Self::read_plans()?;
        let len = plans.len();
        plans.retain(|p| p.id != *id);
        if plans.len() == len {
            return Err(domain::DeleteError::NotFound);
        }
        Self::write_plans(&plans)?;
        Ok(id)
    }
}

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        read(&Key::Settings, Settings::default()).map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(Key::Settings.as_ref(), settings)
            .map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read(&Key::Log, VecDeque::new()).map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        gloo_storage::LocalStorage::set(Key::Log.as_ref(), entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub exercises: Vec<PlanExercise>,
}

impl TryFrom<&domain::WorkoutPlan> for WorkoutPlan {
    type Error = PlanError;

    fn try_from(value: &domain::WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: *value.id.ok_or(PlanError::Unsaved)?,
            name: value.name.to_string(),
            date_created: value.date_created.ok_or(PlanError::Unsaved)?,
            exercises: value.exercises.iter().map(PlanExercise::from).collect(),
        })
    }
}

impl TryFrom<WorkoutPlan> for domain::WorkoutPlan {
    type Error = PlanError;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        let mut exercises = value
            .exercises
            .into_iter()
            .map(domain::PlanExercise::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        exercises.sort_by_key(|e| e.order);
        for (order, exercise) in exercises.iter_mut().enumerate() {
            exercise.order = order;
        }
        Ok(Self {
            id: Some(value.id.into()),
            name: domain::Name::new(&value.name)?,
            date_created: Some(value.date_created),
            exercises,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    pub machine_id: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub order: usize,
}

impl From<&domain::PlanExercise> for PlanExercise {
    fn from(value: &domain::PlanExercise) -> Self {
        Self {
            machine_id: value.machine_id.to_string(),
            sets: u32::from(*value.sets),
            reps: value.reps.to_string(),
            rest_seconds: u32::from(*value.rest),
            order: value.order,
        }
    }
}

impl TryFrom<PlanExercise> for domain::PlanExercise {
    type Error = PlanError;

    fn try_from(value: PlanExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            machine_id: value.machine_id.into(),
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(&value.reps)?,
            rest: domain::Rest::new(value.rest_seconds)?,
            order: value.order,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("workout plan has not been saved")]
    Unsaved,
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidRest(#[from] domain::RestError),
}
