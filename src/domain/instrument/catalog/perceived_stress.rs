//! Perceived Stress Scale, 10-item form (Algılanan Stres Ölçeği).
//!
//! Frequency ratings 0-4, summed to a 0-40 total. Items 4, 5, 7 and 8 ask
//! about positive coping, so their option texts run in the opposite
//! direction; option values always run from "no symptom" to "most severe".

use crate::domain::instrument::{
    AnswerOption, Instrument, InterpretationRange, Prompt, ScoringMethod, Severity,
};

fn frequency_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("Hiçbir zaman", 0),
        AnswerOption::new("Neredeyse hiçbir zaman", 1),
        AnswerOption::new("Bazen", 2),
        AnswerOption::new("Oldukça sık", 3),
        AnswerOption::new("Çok sık", 4),
    ]
}

// Positively worded items: answering "very often" indicates less stress.
fn reversed_frequency_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("Çok sık", 0),
        AnswerOption::new("Oldukça sık", 1),
        AnswerOption::new("Bazen", 2),
        AnswerOption::new("Neredeyse hiçbir zaman", 3),
        AnswerOption::new("Hiçbir zaman", 4),
    ]
}

fn prompt(id: u32, text: &str) -> Prompt {
    Prompt::new(id, text, frequency_options())
}

fn reversed_prompt(id: u32, text: &str) -> Prompt {
    Prompt::new(id, text, reversed_frequency_options())
}

pub fn definition() -> Instrument {
    Instrument {
        id: "perceived-stress".into(),
        title: "Algılanan Stres Ölçeği".into(),
        description: "Son bir ay içinde yaşamınızı ne ölçüde öngörülemez, kontrol \
                      edilemez ve yüklü bulduğunuzu değerlendiren 10 soruluk ölçek."
            .into(),
        instructions: vec![
            "Sorular son bir ay içindeki duygu ve düşünceleriniz hakkındadır.".into(),
            "Her soru için size en yakın sıklığı işaretleyin.".into(),
        ],
        disclaimer: "Bu ölçek tanı koymaz; sonuçlar yalnızca bilgilendirme amaçlıdır.".into(),
        duration: "3-5 dakika".into(),
        prompts: vec![
            prompt(
                1,
                "Beklenmedik bir şey olduğu için ne sıklıkla üzüldünüz?",
            ),
            prompt(
                2,
                "Hayatınızdaki önemli şeyleri kontrol edemediğinizi ne sıklıkla hissettiniz?",
            ),
            prompt(3, "Kendinizi ne sıklıkla gergin ve stresli hissettiniz?"),
            reversed_prompt(
                4,
                "Kişisel sorunlarınızla başa çıkma yeteneğinize ne sıklıkla güvendiniz?",
            ),
            reversed_prompt(
                5,
                "İşlerin istediğiniz gibi gittiğini ne sıklıkla hissettiniz?",
            ),
            prompt(
                6,
                "Yapmanız gereken her şeyin üstesinden gelemeyeceğinizi ne sıklıkla düşündünüz?",
            ),
            reversed_prompt(
                7,
                "Hayatınızdaki sinir bozucu durumları ne sıklıkla kontrol edebildiniz?",
            ),
            reversed_prompt(
                8,
                "Her şeyin üstesinden geldiğinizi ne sıklıkla hissettiniz?",
            ),
            prompt(
                9,
                "Kontrolünüz dışında gelişen olaylar yüzünden ne sıklıkla öfkelendiniz?",
            ),
            prompt(
                10,
                "Zorlukların, üstesinden gelemeyeceğiniz kadar biriktiğini ne sıklıkla hissettiniz?",
            ),
        ],
        scoring: ScoringMethod::Sum,
        ranges: vec![
            InterpretationRange::new(
                0.0,
                13.0,
                "Algılanan stres düzeyiniz düşük görünüyor.",
                Severity::Low,
                "green",
            ),
            InterpretationRange::new(
                14.0,
                26.0,
                "Orta düzeyde algılanan stres görünüyor.",
                Severity::Moderate,
                "orange",
            ),
            InterpretationRange::new(
                27.0,
                40.0,
                "Yüksek düzeyde algılanan stres görünüyor; bir uzmanla görüşmeniz önerilir.",
                Severity::High,
                "red",
            ),
        ],
    }
}
