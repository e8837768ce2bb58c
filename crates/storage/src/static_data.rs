use gymguide_domain as domain;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

const MACHINES: &str = include_str!("../data/machines.json");
const WORKOUTS: &str = include_str!("../data/workouts.json");

/// Machine catalog and prebuilt workouts bundled with the application.
pub struct StaticData;

impl domain::MachineRepository for StaticData {
    async fn read_machines(&self) -> Result<Vec<domain::Machine>, domain::ReadError> {
        let catalog: Machines = parse(MACHINES)?;
        convert(catalog.machines)
    }
}

impl domain::WorkoutRepository for StaticData {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let catalog: Workouts = parse(WORKOUTS)?;
        convert(catalog.workouts)
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, domain::ReadError> {
    serde_json::from_str(json).map_err(|err| domain::ReadError::Other(Box::new(err)))
}

fn convert<V, R>(values: Vec<V>) -> Result<Vec<R>, domain::ReadError>
where
    R: TryFrom<V>,
    <R as TryFrom<V>>::Error: std::error::Error + 'static,
{
    values
        .into_iter()
        .map(R::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| domain::ReadError::Other(Box::new(err)))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct Machines {
    machines: Vec<Machine>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub short_description: String,
    pub muscles_worked: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub safety_warnings: Vec<String>,
    #[serde(default)]
    pub suggested_sets: String,
    #[serde(default)]
    pub youtube_video_id: Option<String>,
}

impl TryFrom<Machine> for domain::Machine {
    type Error = MachineError;

    fn try_from(value: Machine) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: domain::Category::try_from(value.category.as_str())?,
            difficulty: domain::Difficulty::try_from(value.difficulty.as_str())?,
            short_description: value.short_description,
            muscles_worked: value.muscles_worked,
            tags: value.tags,
            steps: value.steps,
            safety_warnings: value.safety_warnings,
            suggested_sets: value.suggested_sets,
            youtube_video_id: value.youtube_video_id,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MachineError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidCategory(#[from] domain::CategoryError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::DifficultyError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct Workouts {
    workouts: Vec<Workout>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WorkoutError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            difficulty: domain::Difficulty::try_from(value.difficulty.as_str())?,
            description: value.description,
            duration: value.duration,
            frequency: value.frequency,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            tips: value.tips,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub machine_id: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = WorkoutError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            machine_id: value.machine_id.into(),
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(&value.reps)?,
            rest: domain::Rest::new(value.rest_seconds)?,
            notes: value.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::DifficultyError),
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidRest(#[from] domain::RestError),
}
