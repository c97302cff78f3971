use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Column order the classifier was trained on
pub const FEATURE_NAMES: [&str; 14] = [
    "age",
    "job_status",
    "bmi",
    "sleep_duration",
    "social_interaction",
    "cognitive_exercise",
    "screen_time",
    "daily_steps",
    "processed_food_frequency",
    "memory_difficulty",
    "focus_loss_frequency",
    "repetitive_questions",
    "difficulty_following_instructions",
    "confusion_frequency",
];

pub const NUM_FEATURES: usize = FEATURE_NAMES.len();

#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("invalid or missing fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("unrecognised {field} option '{value}'")]
    UnknownCategory { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    None,
    Laborer,
    OfficeWorker,
    Professional,
    Retired,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::None,
        JobStatus::Laborer,
        JobStatus::OfficeWorker,
        JobStatus::Professional,
        JobStatus::Retired,
    ];

    pub fn code(self) -> u8 {
        match self {
            JobStatus::None => 0,
            JobStatus::Laborer => 1,
            JobStatus::OfficeWorker => 2,
            JobStatus::Professional => 3,
            JobStatus::Retired => 4,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            JobStatus::None => "none",
            JobStatus::Laborer => "laborer",
            JobStatus::OfficeWorker => "office worker",
            JobStatus::Professional => "professional",
            JobStatus::Retired => "retired",
        }
    }
}

impl FromStr for JobStatus {
    type Err = EncodeError;

    // Accepts the canonical keys and the Indonesian form labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "tidak bekerja" => Ok(JobStatus::None),
            "laborer" | "kuli" => Ok(JobStatus::Laborer),
            "office worker" | "pekerja kantoran" => Ok(JobStatus::OfficeWorker),
            "professional" | "pekerja profesional" => Ok(JobStatus::Professional),
            "retired" | "pensiunan" => Ok(JobStatus::Retired),
            _ => Err(EncodeError::UnknownCategory {
                field: "job_status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveExercise {
    Rare,
    Occasional,
    Frequent,
}

impl CognitiveExercise {
    pub const ALL: [CognitiveExercise; 3] = [
        CognitiveExercise::Rare,
        CognitiveExercise::Occasional,
        CognitiveExercise::Frequent,
    ];

    pub fn code(self) -> u8 {
        match self {
            CognitiveExercise::Rare => 0,
            CognitiveExercise::Occasional => 1,
            CognitiveExercise::Frequent => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CognitiveExercise::Rare => "rare",
            CognitiveExercise::Occasional => "occasional",
            CognitiveExercise::Frequent => "frequent",
        }
    }
}

impl FromStr for CognitiveExercise {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rare" | "sangat jarang" => Ok(CognitiveExercise::Rare),
            "occasional" | "kadang-kadang" => Ok(CognitiveExercise::Occasional),
            "frequent" | "sering" => Ok(CognitiveExercise::Frequent),
            _ => Err(EncodeError::UnknownCategory {
                field: "cognitive_exercise",
                value: s.to_string(),
            }),
        }
    }
}

/// Raw values of one form submission. Every field is optional so that an
/// unset input reaches validation instead of failing JSON decoding.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PredictionForm {
    pub age: Option<i64>,
    pub job_status: Option<String>,
    pub bmi: Option<f64>,
    pub sleep_duration: Option<i64>,
    pub social_interaction: Option<i64>,
    pub cognitive_exercise: Option<String>,
    pub screen_time: Option<i64>,
    pub daily_steps: Option<i64>,
    pub processed_food_frequency: Option<i64>,
    pub memory_difficulty: Option<i64>,
    pub focus_loss_frequency: Option<i64>,
    pub repetitive_questions: Option<i64>,
    pub difficulty_following_instructions: Option<i64>,
    pub confusion_frequency: Option<i64>,
}

/// Validated and encoded submission, ready for the classifier
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFeatures {
    pub age: u32,
    pub job_status: JobStatus,
    pub bmi: f32,
    pub sleep_duration: u32,
    pub social_interaction: u32,
    pub cognitive_exercise: CognitiveExercise,
    pub screen_time: u32,
    pub daily_steps: u32,
    pub processed_food_frequency: u32,
    pub memory_difficulty: u32,
    pub focus_loss_frequency: u32,
    pub repetitive_questions: u32,
    pub difficulty_following_instructions: u32,
    pub confusion_frequency: u32,
}

impl RiskFeatures {
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.age as f32,
            self.job_status.code() as f32,
            self.bmi,
            self.sleep_duration as f32,
            self.social_interaction as f32,
            self.cognitive_exercise.code() as f32,
            self.screen_time as f32,
            self.daily_steps as f32,
            self.processed_food_frequency as f32,
            self.memory_difficulty as f32,
            self.focus_loss_frequency as f32,
            self.repetitive_questions as f32,
            self.difficulty_following_instructions as f32,
            self.confusion_frequency as f32,
        ]
    }
}

/// Collects every violated field instead of stopping at the first one
#[derive(Default)]
struct FieldChecker {
    violations: Vec<&'static str>,
}

impl FieldChecker {
    fn integer(&mut self, field: &'static str, value: Option<i64>, min: i64, max: Option<i64>) -> u32 {
        match value {
            Some(v) if v >= min && max.is_none_or(|m| v <= m) => match u32::try_from(v) {
                Ok(v) => v,
                Err(_) => {
                    self.violations.push(field);
                    0
                }
            },
            _ => {
                self.violations.push(field);
                0
            }
        }
    }

    fn positive_float(&mut self, field: &'static str, value: Option<f64>) -> f32 {
        // Finite as f64 can still overflow to infinity as f32
        match value.map(|v| v as f32) {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => {
                self.violations.push(field);
                0.0
            }
        }
    }

    fn selection<'a>(&mut self, field: &'static str, value: Option<&'a str>) -> Option<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.violations.push(field);
                None
            }
        }
    }
}

/// Validates a submission and encodes it into `RiskFeatures`.
///
/// Counts and durations must be strictly positive, the 0-5 scales may be zero,
/// and both selections must be set. Ranges enforced by the form widgets
/// (age 20-100, sleep up to 24 hours, screen time up to 20 hours) are checked
/// here as well since the form is not trusted.
pub fn encode(form: &PredictionForm) -> Result<RiskFeatures, EncodeError> {
    let mut checker = FieldChecker::default();

    let age = checker.integer("age", form.age, 20, Some(100));
    let job_status = checker.selection("job_status", form.job_status.as_deref());
    let bmi = checker.positive_float("bmi", form.bmi);
    let sleep_duration = checker.integer("sleep_duration", form.sleep_duration, 1, Some(24));
    let social_interaction = checker.integer("social_interaction", form.social_interaction, 1, None);
    let cognitive_exercise = checker.selection("cognitive_exercise", form.cognitive_exercise.as_deref());
    let screen_time = checker.integer("screen_time", form.screen_time, 1, Some(20));
    let daily_steps = checker.integer("daily_steps", form.daily_steps, 1, None);
    let processed_food_frequency =
        checker.integer("processed_food_frequency", form.processed_food_frequency, 1, None);
    let memory_difficulty = checker.integer("memory_difficulty", form.memory_difficulty, 0, Some(5));
    let focus_loss_frequency =
        checker.integer("focus_loss_frequency", form.focus_loss_frequency, 0, Some(5));
    let repetitive_questions =
        checker.integer("repetitive_questions", form.repetitive_questions, 0, Some(5));
    let difficulty_following_instructions = checker.integer(
        "difficulty_following_instructions",
        form.difficulty_following_instructions,
        0,
        Some(5),
    );
    let confusion_frequency = checker.integer("confusion_frequency", form.confusion_frequency, 0, Some(5));

    let (Some(job_status), Some(cognitive_exercise)) = (job_status, cognitive_exercise) else {
        return Err(EncodeError::Validation(checker.violations));
    };
    if !checker.violations.is_empty() {
        return Err(EncodeError::Validation(checker.violations));
    }

    Ok(RiskFeatures {
        age,
        job_status: job_status.parse()?,
        bmi,
        sleep_duration,
        social_interaction,
        cognitive_exercise: cognitive_exercise.parse()?,
        screen_time,
        daily_steps,
        processed_food_frequency,
        memory_difficulty,
        focus_loss_frequency,
        repetitive_questions,
        difficulty_following_instructions,
        confusion_frequency,
    })
}
