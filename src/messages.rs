use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::risk_prediction::risk_prediction_utils::{CognitiveExercise, JobStatus};

/// Language used for every user-visible text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Indonesian,
}

impl Language {
    pub fn app_title(self) -> &'static str {
        match self {
            Language::English => "Alzheimer's Disease Risk Prediction",
            Language::Indonesian => "Aplikasi Prediksi Risiko Penyakit Alzheimer",
        }
    }

    pub fn consult_doctor(self) -> &'static str {
        match self {
            Language::English => "It is recommended to consult a doctor.",
            Language::Indonesian => "Disarankan untuk konsultasi ke dokter.",
        }
    }

    pub fn no_consultation(self) -> &'static str {
        match self {
            Language::English => "Consulting a doctor is not recommended.",
            Language::Indonesian => "Tidak disarankan untuk konsultasi ke dokter.",
        }
    }

    pub fn fill_all_fields(self) -> &'static str {
        match self {
            Language::English => "Please fill in all fields before predicting!",
            Language::Indonesian => "Harap isi semua kolom sebelum melakukan prediksi!",
        }
    }

    pub fn model_not_found(self, model_path: &Path) -> String {
        match self {
            Language::English => format!(
                "Model not found. Make sure the file '{}' is available in the expected directory.",
                model_path.display()
            ),
            Language::Indonesian => format!(
                "Model tidak ditemukan. Pastikan file '{}' tersedia di direktori yang sesuai.",
                model_path.display()
            ),
        }
    }

    pub fn prediction_failed(self, cause: &str) -> String {
        match self {
            Language::English => format!("An error occurred during prediction: {cause}"),
            Language::Indonesian => format!("Terjadi kesalahan dalam proses prediksi: {cause}"),
        }
    }

    pub fn unexpected_error(self, cause: &str) -> String {
        match self {
            Language::English => format!("Unexpected error: {cause}"),
            Language::Indonesian => format!("Kesalahan tak terduga: {cause}"),
        }
    }

    pub fn job_status_label(self, status: JobStatus) -> &'static str {
        match (self, status) {
            (Language::English, JobStatus::None) => "Not working",
            (Language::English, JobStatus::Laborer) => "Laborer",
            (Language::English, JobStatus::OfficeWorker) => "Office worker",
            (Language::English, JobStatus::Professional) => "Professional",
            (Language::English, JobStatus::Retired) => "Retired",
            (Language::Indonesian, JobStatus::None) => "Tidak bekerja",
            (Language::Indonesian, JobStatus::Laborer) => "Kuli",
            (Language::Indonesian, JobStatus::OfficeWorker) => "Pekerja kantoran",
            (Language::Indonesian, JobStatus::Professional) => "Pekerja Profesional",
            (Language::Indonesian, JobStatus::Retired) => "Pensiunan",
        }
    }

    pub fn cognitive_exercise_label(self, exercise: CognitiveExercise) -> &'static str {
        match (self, exercise) {
            (Language::English, CognitiveExercise::Rare) => "Very rarely",
            (Language::English, CognitiveExercise::Occasional) => "Occasionally",
            (Language::English, CognitiveExercise::Frequent) => "Often",
            (Language::Indonesian, CognitiveExercise::Rare) => "Sangat Jarang",
            (Language::Indonesian, CognitiveExercise::Occasional) => "Kadang-kadang",
            (Language::Indonesian, CognitiveExercise::Frequent) => "Sering",
        }
    }

    /// Form label for a field of `FEATURE_NAMES`
    pub fn field_label(self, field: &str) -> &'static str {
        match self {
            Language::English => match field {
                "age" => "Age (years)",
                "job_status" => "Job status",
                "bmi" => "Body Mass Index (BMI)",
                "sleep_duration" => "Sleep duration (hours/day)",
                "social_interaction" => "Social interaction (days/week)",
                "cognitive_exercise" => "Cognitive exercise",
                "screen_time" => "Screen time per day (hours)",
                "daily_steps" => "Daily steps",
                "processed_food_frequency" => "Processed food consumption (times/week)",
                "memory_difficulty" => "Difficulty remembering new information",
                "focus_loss_frequency" => "Frequency of losing focus",
                "repetitive_questions" => "Asking the same questions repeatedly",
                "difficulty_following_instructions" => "Difficulty following instructions",
                "confusion_frequency" => "Frequency of confusion",
                _ => "",
            },
            Language::Indonesian => match field {
                "age" => "Usia (tahun)",
                "job_status" => "Status Pekerjaan",
                "bmi" => "Indeks Massa Tubuh (BMI)",
                "sleep_duration" => "Durasi Tidur (jam/hari)",
                "social_interaction" => "Interaksi Sosial (hari/minggu)",
                "cognitive_exercise" => "Latihan Kognitif",
                "screen_time" => "Penggunaan Gadget Dalam 1 Hari",
                "daily_steps" => "Langkah Harian",
                "processed_food_frequency" => "Frekuensi Konsumsi Makanan Olahan (kali/minggu)",
                "memory_difficulty" => "Kesulitan Mengingat Informasi Baru",
                "focus_loss_frequency" => "Frekuensi Kehilangan Fokus",
                "repetitive_questions" => "Bertanya Berulang-Ulang",
                "difficulty_following_instructions" => "Kesulitan Mengikuti Perintah",
                "confusion_frequency" => "Frekuensi Kebingungan",
                _ => "",
            },
        }
    }
}
