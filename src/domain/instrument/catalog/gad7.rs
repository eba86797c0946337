//! GAD-7 generalized anxiety screening.
//!
//! Seven prompts scored 0-3, summed. Cutoffs: 0-4 minimal, 5-9 mild,
//! 10-14 moderate, 15-21 severe.

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
        id: "gad7".into(),
        title: "GAD-7 Yaygın Anksiyete Taraması".into(),
        description: "Son iki hafta içindeki kaygı belirtilerinin şiddetini \
                      değerlendiren yedi soruluk tarama ölçeği."
            .into(),
        instructions: vec![
            "Son iki hafta içinde aşağıdaki sorunlar sizi ne sıklıkla rahatsız etti?".into(),
        ],
        disclaimer: "Bu test tanı koymaz; sonuçlar yalnızca bilgilendirme amaçlıdır.".into(),
        duration: "2-3 dakika".into(),
        prompts: vec![
            prompt(1, "Sinirli, kaygılı veya gergin hissetmek"),
            prompt(2, "Endişelenmeyi durduramamak veya kontrol edememek"),
            prompt(3, "Farklı konular hakkında çok fazla endişelenmek"),
            prompt(4, "Gevşeyip rahatlayamamak"),
            prompt(5, "Yerinde duramayacak kadar huzursuz olmak"),
            prompt(6, "Kolayca sinirlenmek veya huzursuz olmak"),
            prompt(7, "Kötü bir şey olacakmış gibi korkuya kapılmak"),
        ],
        scoring: ScoringMethod::Sum,
        ranges: vec![
            InterpretationRange::new(
                0.0,
                4.0,
                "Kaygı düzeyiniz minimal görünüyor.",
                Severity::Low,
                "green",
            ),
            InterpretationRange::new(
                5.0,
                9.0,
                "Hafif düzeyde kaygı belirtileri görünüyor.",
                Severity::Mild,
                "yellow",
            ),
            InterpretationRange::new(
                10.0,
                14.0,
                "Orta düzeyde kaygı belirtileri görünüyor; bir uzmanla görüşmeniz önerilir.",
                Severity::Moderate,
                "orange",
            ),
            InterpretationRange::new(
                15.0,
                21.0,
                "Yüksek düzeyde kaygı belirtileri görünüyor; bir uzmana başvurmanız önerilir.",
                Severity::High,
                "red",
            ),
        ],
    }
}
