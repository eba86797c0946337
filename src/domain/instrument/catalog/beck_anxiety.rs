//! Beck Anxiety Inventory (Beck Anksiyete Envanteri).
//!
//! Twenty-one somatic and cognitive anxiety symptoms rated 0-3 for the past
//! week, summed to a 0-63 total. Cutoffs: 0-7 minimal, 8-15 mild,
//! 16-25 moderate, 26-63 severe.

use crate::domain::instrument::{
    AnswerOption, Instrument, InterpretationRange, Prompt, ScoringMethod, Severity,
};

fn intensity_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("Hiç", 0),
        AnswerOption::new("Hafif düzeyde, beni pek etkilemedi", 1),
        AnswerOption::new("Orta düzeyde, hoş değildi ama katlanabildim", 2),
        AnswerOption::new("Ciddi düzeyde, dayanmakta zorlandım", 3),
    ]
}

fn prompt(id: u32, text: &str) -> Prompt {
    Prompt::new(id, text, intensity_options())
}

pub fn definition() -> Instrument {
    Instrument {
        id: "beck-anxiety".into(),
        title: "Beck Anksiyete Envanteri".into(),
        description: "Son bir hafta içinde yaşanan bedensel ve bilişsel kaygı \
                      belirtilerinin şiddetini değerlendiren 21 soruluk envanter."
            .into(),
        instructions: vec![
            "Aşağıda kaygının sık görülen belirtileri listelenmiştir.".into(),
            "Son bir hafta içinde her belirtiden ne ölçüde rahatsız olduğunuzu işaretleyin.".into(),
        ],
        disclaimer: "Bu envanter tanı koymaz; sonuçlar yalnızca bilgilendirme amaçlıdır. \
                     Kesin değerlendirme için bir uzmana başvurun."
            .into(),
        duration: "5-10 dakika".into(),
        prompts: vec![
            prompt(1, "Bedeninizde uyuşma veya karıncalanma"),
            prompt(2, "Sıcak basması"),
            prompt(3, "Bacaklarda halsizlik veya titreme"),
            prompt(4, "Gevşeyememe"),
            prompt(5, "Çok kötü şeyler olacak korkusu"),
            prompt(6, "Baş dönmesi veya sersemlik"),
            prompt(7, "Kalp çarpıntısı"),
            prompt(8, "Dengeyi kaybetme duygusu"),
            prompt(9, "Dehşete kapılma"),
            prompt(10, "Sinirlilik"),
            prompt(11, "Boğuluyormuş gibi olma duygusu"),
            prompt(12, "Ellerde titreme"),
            prompt(13, "Titreklik"),
            prompt(14, "Kontrolü kaybetme korkusu"),
            prompt(15, "Nefes almada güçlük"),
            prompt(16, "Ölüm korkusu"),
            prompt(17, "Korkuya kapılma"),
            prompt(18, "Midede hazımsızlık veya rahatsızlık hissi"),
            prompt(19, "Baygınlık hissi"),
            prompt(20, "Yüzün kızarması"),
            prompt(21, "Sıcaklığa bağlı olmayan terleme"),
        ],
        scoring: ScoringMethod::Sum,
        ranges: vec![
            InterpretationRange::new(
                0.0,
                7.0,
                "Kaygı düzeyiniz minimal görünüyor.",
                Severity::Low,
                "green",
            ),
            InterpretationRange::new(
                8.0,
                15.0,
                "Hafif düzeyde kaygı belirtileri görünüyor.",
                Severity::Mild,
                "yellow",
            ),
            InterpretationRange::new(
                16.0,
                25.0,
                "Orta düzeyde kaygı belirtileri görünüyor; bir uzmanla görüşmeniz önerilir.",
                Severity::Moderate,
                "orange",
            ),
            InterpretationRange::new(
                26.0,
                63.0,
                "Yüksek düzeyde kaygı belirtileri görünüyor; bir uzmana başvurmanız önerilir.",
                Severity::High,
                "red",
            ),
        ],
    }
}
