#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

mod diagram;
mod error;
mod filter;
mod machine;
mod muscle;
mod muscle_group;
mod name;
mod service;
mod workout;
mod workout_plan;

pub use diagram::{
    Diagram, LegendEntry, MuscleDiagram, OUTLINE, RegionShape, Shape, Style, StyledShape, VIEW_BOX,
    View, legend, render,
};
pub use error::{DeleteError, ReadError, StorageError, UpdateError};
pub use filter::{FilterScope, MachineFilter, filter};
pub use machine::{
    Category, CategoryError, Difficulty, DifficultyError, Machine, MachineID, MachineRepository,
    MachineService,
};
pub use muscle::{
    ActivationLevel, ActivationMap, ActivationScheme, Region, is_known_label, merge_labels, regions,
    resolve,
};
pub use muscle_group::{
    MuscleGroup, MuscleGroupInfo, machine_matches_muscle_group, muscle_group, muscle_groups,
};
pub use name::{Name, NameError};
pub use service::Service;
pub use workout::{
    Reps, RepsError, Rest, RestError, Sets, SetsError, Workout, WorkoutExercise, WorkoutID,
    WorkoutRepository, WorkoutService,
};
pub use workout_plan::{
    ExerciseUpdate, PlanExercise, PlanID, WorkoutBuilder, WorkoutPlan, WorkoutPlanRepository,
    WorkoutPlanService,
};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
