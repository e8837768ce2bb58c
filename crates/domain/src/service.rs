use log::{error, warn};

use crate::{
    DeleteError, Machine, MachineRepository, MachineService, PlanID, ReadError, UpdateError,
    Workout, WorkoutPlan, WorkoutPlanRepository, WorkoutPlanService, WorkoutRepository,
    WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::QuotaExceeded) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: MachineRepository> MachineService for Service<R> {
    async fn get_machines(&self) -> Result<Vec<Machine>, ReadError> {
        log_on_error!(
            self.repository.read_machines(),
            ReadError,
            "get",
            "machines"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }
}

impl<R: WorkoutPlanRepository> WorkoutPlanService for Service<R> {
    async fn get_workout_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError> {
        log_on_error!(
            self.repository.read_workout_plans(),
            ReadError,
            "get",
            "workout plans"
        )
    }

    async fn replace_workout_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan, UpdateError> {
        log_on_error!(
            self.repository.replace_workout_plan(plan),
            UpdateError,
            "save",
            "workout plan"
        )
    }

    async fn delete_workout_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout_plan(id),
            DeleteError,
            "delete",
            "workout plan"
        )
    }
}
