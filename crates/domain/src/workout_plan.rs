use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{
    ActivationMap, ActivationScheme, DeleteError, Machine, MachineID, Name, ReadError, Reps, Rest,
    Sets, UpdateError, merge_labels, resolve,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutPlanService {
    async fn get_workout_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError>;
    async fn replace_workout_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan, UpdateError>;
    async fn delete_workout_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutPlanRepository {
    async fn read_workout_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError>;
    /// Replace the plan with the same ID or append it.
    async fn replace_workout_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan, UpdateError>;
    async fn delete_workout_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

/// User-built workout.
///
/// A plan gets its ID and creation date when it is saved for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub id: Option<PlanID>,
    pub name: Name,
    pub date_created: Option<DateTime<Utc>>,
    pub exercises: Vec<PlanExercise>,
}

impl Default for WorkoutPlan {
    fn default() -> Self {
        Self {
            id: None,
            name: Name::from_static(WorkoutPlan::DEFAULT_NAME),
            date_created: None,
            exercises: vec![],
        }
    }
}

impl WorkoutPlan {
    pub const DEFAULT_NAME: &'static str = "Untitled Workout";

    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

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

    fn renumber(&mut self) {
        for (order, exercise) in self.exercises.iter_mut().enumerate() {
            exercise.order = order;
        }
    }
}

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanExercise {
    pub machine_id: MachineID,
    pub sets: Sets,
    pub reps: Reps,
    pub rest: Rest,
    pub order: usize,
}

impl PlanExercise {
    #[must_use]
    pub fn new(machine_id: MachineID, order: usize) -> Self {
        Self {
            machine_id,
            sets: Sets::default(),
            reps: Reps::default(),
            rest: Rest::default(),
            order,
        }
    }
}

/// Partial change of a plan exercise, unset fields are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseUpdate {
    pub sets: Option<Sets>,
    pub reps: Option<Reps>,
    pub rest: Option<Rest>,
}

/// Editing state of the workout builder: the plan being edited and all saved plans.
///
/// The builder does not persist anything itself. The plans returned by `save_plan` and
/// the IDs of deleted plans have to be passed to a `WorkoutPlanService`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutBuilder {
    current: WorkoutPlan,
    saved: Vec<WorkoutPlan>,
}

impl WorkoutBuilder {
    #[must_use]
    pub fn new(saved: Vec<WorkoutPlan>) -> Self {
        Self {
            current: WorkoutPlan::default(),
            saved,
        }
    }

    #[must_use]
    pub fn current(&self) -> &WorkoutPlan {
        &self.current
    }

    #[must_use]
    pub fn saved(&self) -> &[WorkoutPlan] {
        &self.saved
    }

    #[must_use]
    pub fn contains(&self, machine_id: &MachineID) -> bool {
        self.current
            .exercises
            .iter()
            .any(|e| e.machine_id == *machine_id)
    }

    /// Empty plans cannot be saved.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.current.exercises.is_empty()
    }

    /// Returns false if the machine is already part of the plan.
    pub fn add_exercise(&mut self, machine_id: MachineID) -> bool {
        if self.contains(&machine_id) {
            return false;
        }
        let order = self.current.exercises.len();
        self.current
            .exercises
            .push(PlanExercise::new(machine_id, order));
        true
    }

    pub fn remove_exercise(&mut self, index: usize) {
        if index < self.current.exercises.len() {
            self.current.exercises.remove(index);
            self.current.renumber();
        }
    }

    pub fn update_exercise(&mut self, index: usize, update: ExerciseUpdate) {
        if let Some(exercise) = self.current.exercises.get_mut(index) {
            if let Some(sets) = update.sets {
                exercise.sets = sets;
            }
            if let Some(reps) = update.reps {
                exercise.reps = reps;
            }
            if let Some(rest) = update.rest {
                exercise.rest = rest;
            }
        }
    }

    pub fn reorder_exercises(&mut self, from: usize, to: usize) {
        let len = self.current.exercises.len();
        if from >= len || to >= len || from == to {
            return;
        }
        let exercise = self.current.exercises.remove(from);
        self.current.exercises.insert(to, exercise);
        self.current.renumber();
    }

    pub fn rename(&mut self, name: Name) {
        self.current.name = name;
    }

    /// Assign ID and creation date on the first save and replace the saved plan.
    ///
    /// The plan moves to the end of the saved plans.
    pub fn save_plan(&mut self, now: DateTime<Utc>) -> WorkoutPlan {
        if self.current.id.is_none() {
            self.current.id = Some(PlanID::random());
            self.current.date_created = Some(now);
        }
        self.current.date_created.get_or_insert(now);
        self.saved.retain(|p| p.id != self.current.id);
        self.saved.push(self.current.clone());
        self.current.clone()
    }

    pub fn load_plan(&mut self, id: PlanID) -> bool {
        match self.saved.iter().find(|p| p.id == Some(id)) {
            Some(plan) => {
                self.current = plan.clone();
                true
            }
            None => false,
        }
    }

    /// The current plan is kept even if it is the deleted one.
    pub fn delete_plan(&mut self, id: PlanID) -> bool {
        let len = self.saved.len();
        self.saved.retain(|p| p.id != Some(id));
        self.saved.len() != len
    }

    pub fn clear_plan(&mut self) {
        self.current = WorkoutPlan::default();
    }
}
