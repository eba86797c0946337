//! PHQ-9 depression screening (Hasta Sağlığı Anketi).
//!
//! Nine prompts scored 0-3, summed. Cutoffs follow the published PHQ-9
//! bands: 0-4 minimal, 5-9 mild, 10-14 moderate, 15-19 moderately severe,
//! 20-27 severe.

use crate::domain::instrument::{
    AnswerOption, Instrument, InterpretationRange, Prompt, ScoringMethod, Severity,
};

fn frequency_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("Hiçbir zaman", 0),
        AnswerOption::new("Birkaç gün", 1),
        AnswerOption::new("Günlerin yarısından fazlasında", 2),
        AnswerOption::new("Hemen hemen her gün", 3),
    ]
}

fn prompt(id: u32, text: &str) -> Prompt {
    Prompt::new(id, text, frequency_options())
}

pub fn definition() -> Instrument {
    Instrument {
        id: "phq9".into(),
        title: "PHQ-9 Depresyon Taraması".into(),
        description: "Son iki hafta içindeki depresif belirtilerin şiddetini \
                      değerlendiren dokuz soruluk tarama ölçeği."
            .into(),
        instructions: vec![
            "Son iki hafta içinde aşağıdaki sorunlar sizi ne sıklıkla rahatsız etti?".into(),
            "Her soru için size en uygun seçeneği işaretleyin.".into(),
        ],
        disclaimer: "Bu test tanı koymaz; sonuçlar yalnızca bilgilendirme amaçlıdır. \
                     Kesin değerlendirme için bir uzmana başvurun."
            .into(),
        duration: "3-5 dakika".into(),
        prompts: vec![
            prompt(1, "İşlere karşı ilgi veya istek duymamak"),
            prompt(2, "Kendini üzgün, çökkün veya umutsuz hissetmek"),
            prompt(3, "Uykuya dalmakta güçlük, sık uyanma veya aşırı uyuma"),
            prompt(4, "Kendini yorgun veya enerjisiz hissetmek"),
            prompt(5, "İştahsızlık veya aşırı yeme"),
            prompt(
                6,
                "Kendini kötü hissetmek; başarısız olduğunu ya da ailesini hayal \
                 kırıklığına uğrattığını düşünmek",
            ),
            prompt(
                7,
                "Gazete okumak veya televizyon izlemek gibi işlere odaklanmakta güçlük",
            ),
            prompt(
                8,
                "Hareket veya konuşmada fark edilir yavaşlama; ya da tam tersi, \
                 huzursuzluk ve yerinde duramama",
            ),
            prompt(9, "Ölmüş olmayı ya da kendine zarar vermeyi düşünmek"),
        ],
        scoring: ScoringMethod::Sum,
        ranges: vec![
            InterpretationRange::new(
                0.0,
                4.0,
                "Depresif belirti düzeyiniz minimal görünüyor.",
                Severity::Low,
                "green",
            ),
            InterpretationRange::new(
                5.0,
                9.0,
                "Hafif düzeyde depresif belirtiler görünüyor.",
                Severity::Mild,
                "yellow",
            ),
            InterpretationRange::new(
                10.0,
                14.0,
                "Orta düzeyde depresif belirtiler görünüyor; bir uzmanla görüşmeniz önerilir.",
                Severity::Moderate,
                "orange",
            ),
            InterpretationRange::new(
                15.0,
                19.0,
                "Orta-ağır düzeyde depresif belirtiler görünüyor; bir uzmana başvurmanız önerilir.",
                Severity::High,
                "red",
            ),
            InterpretationRange::new(
                20.0,
                27.0,
                "Ağır düzeyde depresif belirtiler görünüyor; en kısa sürede bir uzmana başvurun.",
                Severity::Severe,
                "darkred",
            ),
        ],
    }
}
