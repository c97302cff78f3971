use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::messages::Language;

/// The two pages of the navigation switch. Both are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Explanation,
    Prediction,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub markdown: &'static str,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Explanation, Page::Prediction];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Explanation => "explanation",
            Page::Prediction => "prediction",
        }
    }

    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (Page::Explanation, Language::English) => "About the Application",
            (Page::Explanation, Language::Indonesian) => "Penjelasan Aplikasi",
            (Page::Prediction, Language::English) => "Alzheimer's Risk Prediction",
            (Page::Prediction, Language::Indonesian) => "Prediksi Risiko Alzheimer",
        }
    }

    pub fn sections(self, language: Language) -> Vec<Section> {
        match (self, language) {
            (Page::Explanation, Language::English) => vec![
                Section { title: "About the Application", markdown: EXPLANATION_FEATURES_EN },
                Section { title: "How to Use", markdown: EXPLANATION_USAGE_EN },
                Section { title: "Purpose of the Application", markdown: EXPLANATION_GOALS_EN },
            ],
            (Page::Explanation, Language::Indonesian) => vec![
                Section { title: "Penjelasan Aplikasi", markdown: EXPLANATION_FEATURES_ID },
                Section { title: "Cara Penggunaan", markdown: EXPLANATION_USAGE_ID },
                Section { title: "Tujuan Aplikasi", markdown: EXPLANATION_GOALS_ID },
            ],
            (Page::Prediction, language) => vec![Section {
                title: language.app_title(),
                markdown: match language {
                    Language::English => PREDICTION_INTRO_EN,
                    Language::Indonesian => PREDICTION_INTRO_ID,
                },
            }],
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

const PREDICTION_INTRO_EN: &str = "This application helps detect an early risk of Alzheimer's disease \
based on lifestyle and health factors. The prediction is not a medical diagnosis; consult a doctor \
for certainty.";

const PREDICTION_INTRO_ID: &str = "Aplikasi ini dirancang untuk membantu mendeteksi risiko awal penyakit \
Alzheimer berdasarkan faktor-faktor gaya hidup dan kesehatan. Hasil prediksi ini bukan diagnosis medis, \
dan konsultasikan dengan dokter untuk kepastian lebih lanjut.";

const EXPLANATION_FEATURES_EN: &str = "\
**Main Features of the Application**:
1. Age: a person's age, one of the main risk factors for Alzheimer's disease.
2. Job: the kind of work reflects mental and social activity, which can affect the risk.
3. BMI: a measure of body weight status based on weight and height.
4. Sleep Duration: sleep quality and duration matter for physical, mental and cognitive health.
5. Social Interaction: low social activity can increase the risk of cognitive decline.
6. Cognitive Exercise: activities that train the brain, such as reading or puzzles, can improve cognitive function.
7. Screen Time: time spent using electronic devices.
8. Daily Steps: walking or light physical activity supports brain and body health.
9. Processed Food Frequency: processed food can increase the risk of brain damage.
10. Difficulty Remembering New Information: remembering new information is an important cognitive aspect.
11. Focus Loss Frequency: frequent loss of focus can be a sign of cognitive impairment.
12. Repetitive Questions: can be a sign of cognitive decline.
13. Difficulty Following Instructions: trouble understanding instructions can signal a cognitive problem.
14. Confusion Frequency: confusion about time, place or situation can indicate memory impairment.
";

const EXPLANATION_USAGE_EN: &str = "\
**Steps**:
1. Open the Alzheimer's Risk Prediction page.
2. Fill in every field of the form.
3. Press **Predict Alzheimer's Risk**.
4. Read the prediction result on the main screen.
";

const EXPLANATION_GOALS_EN: &str = "\
**Main Goals**:
- Raise awareness of Alzheimer's risk.
- Help users understand the risk factors.
- Give guidance for preventive action.
";

const EXPLANATION_FEATURES_ID: &str = "\
**Fitur Utama Aplikasi**:
1. Umur: Usia seseorang, salah satu faktor risiko utama untuk penyakit Alzheimer.
2. Pekerjaan: Jenis pekerjaan mencerminkan aktivitas mental dan sosial, yang dapat memengaruhi risiko Alzheimer.
3. BMI: Pengukuran yang digunakan untuk menilai status berat badan seseorang berdasarkan berat badan dan tinggi badan.
4. Durasi Tidur: Kualitas dan durasi tidur sangat penting untuk menjaga kesehatan fisik, mental, dan kognitif.
5. Interaksi Sosial: Aktivitas sosial yang rendah dapat meningkatkan risiko penurunan kognitif.
6. Latihan Kognitif: Aktivitas yang melatih otak, seperti membaca atau bermain teka-teki, dapat meningkatkan fungsi kognitif.
7. Screen Time: Waktu yang dihabiskan untuk menggunakan perangkat elektronik.
8. Langkah Per Hari: Berjalan atau aktivitas fisik ringan mendukung kesehatan otak dan tubuh.
9. Frekuensi Konsumsi Makanan Olahan: Makanan olahan dapat meningkatkan risiko kerusakan otak.
10. Kesulitan Mengingat Informasi Baru: Mengingat informasi baru adalah aspek kognitif yang penting.
11. Frekuensi Kehilangan Fokus: Kehilangan fokus yang sering dapat menjadi tanda gangguan kognitif.
12. Bertanya Berulang-Ulang: Dapat menjadi tanda penurunan kognitif.
13. Kesulitan Mengikuti Perintah: Kesulitan dalam memahami instruksi bisa menjadi tanda masalah kognitif.
14. Frekuensi Kebingungan: Kebingungan tentang waktu, tempat, atau situasi dapat menunjukkan gangguan memori.
";

const EXPLANATION_USAGE_ID: &str = "\
**Langkah-Langkah**:
1. Pilih Halaman Prediksi Risiko Alzheimer
2. Isi semua data di sidebar.
3. Klik tombol **Prediksi Risiko Alzheimer**.
4. Lihat hasil prediksi di layar utama.
";

const EXPLANATION_GOALS_ID: &str = "\
**Tujuan Utama**:
- Meningkatkan kesadaran tentang risiko Alzheimer.
- Membantu pengguna memahami faktor risiko.
- Memberikan panduan untuk tindakan preventif.
";
