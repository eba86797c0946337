//! Property tests for the scoring engine and instrument definitions.

use proptest::prelude::*;

use screening_backend::domain::instrument::{
    catalog, AnswerOption, Instrument, InterpretationRange, Prompt, ScoringMethod, Severity,
};
use screening_backend::domain::session::Session;

/// Builds an instrument where prompt `i` has `option_counts[i]` options
/// with values 0..count, under a single all-covering range.
fn instrument_with(option_counts: &[usize], scoring: ScoringMethod) -> Instrument {
    let prompts: Vec<Prompt> = option_counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            let options = (0..*count)
                .map(|v| AnswerOption::new(format!("option {}", v), v as u32))
                .collect();
            Prompt::new(i as u32 + 1, format!("prompt {}", i + 1), options)
        })
        .collect();
    let max: f64 = option_counts.iter().map(|c| (c - 1) as f64).sum();
    let max = match scoring {
        ScoringMethod::Average => max / option_counts.len() as f64,
        _ => max,
    };
    Instrument {
        id: "generated".into(),
        title: "Generated".into(),
        description: String::new(),
        instructions: vec![],
        disclaimer: String::new(),
        duration: String::new(),
        prompts,
        scoring,
        ranges: vec![InterpretationRange::new(
            0.0,
            max,
            "covered",
            Severity::Low,
            "green",
        )],
    }
}

fn contact() -> screening_backend::domain::contact::ContactInfo {
    screening_backend::domain::contact::ContactInfo::new("Ayşe", "Yılmaz", "a@example.com", None)
        .unwrap()
}

/// (option_counts, selection per prompt within bounds)
fn answered_instrument_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    prop::collection::vec(2usize..=10, 1..=15).prop_flat_map(|counts| {
        let selections: Vec<_> = counts.iter().map(|c| 0..*c).collect();
        (Just(counts), selections)
    })
}

proptest! {
    #[test]
    fn sum_scoring_equals_arithmetic_sum((counts, picks) in answered_instrument_strategy()) {
        let instrument = instrument_with(&counts, ScoringMethod::Sum);
        let mut session = Session::with_instrument(&instrument);
        for (i, pick) in picks.iter().enumerate() {
            session.select_response(i as u32 + 1, *pick).unwrap();
        }

        let result = session.compute_result(contact()).unwrap();
        let expected: f64 = picks.iter().map(|p| *p as f64).sum();
        prop_assert_eq!(result.total_score, expected);
    }

    #[test]
    fn average_scoring_is_sum_over_prompt_count((counts, picks) in answered_instrument_strategy()) {
        let instrument = instrument_with(&counts, ScoringMethod::Average);
        let mut session = Session::with_instrument(&instrument);
        for (i, pick) in picks.iter().enumerate() {
            session.select_response(i as u32 + 1, *pick).unwrap();
        }

        let result = session.compute_result(contact()).unwrap();
        let sum: f64 = picks.iter().map(|p| *p as f64).sum();
        prop_assert_eq!(result.total_score, sum / counts.len() as f64);
    }

    #[test]
    fn reselecting_a_prompt_keeps_exactly_one_response(
        (counts, picks) in answered_instrument_strategy(),
        second_picks in prop::collection::vec(0usize..2, 1..=15),
    ) {
        let instrument = instrument_with(&counts, ScoringMethod::Sum);
        let mut session = Session::with_instrument(&instrument);
        for (i, pick) in picks.iter().enumerate() {
            session.select_response(i as u32 + 1, *pick).unwrap();
        }
        // Second pass overwrites a prefix of the prompts.
        for (i, pick) in second_picks.iter().enumerate().take(counts.len()) {
            session.select_response(i as u32 + 1, *pick).unwrap();
        }

        prop_assert_eq!(session.answered_count(), counts.len());
        for (i, pick) in second_picks.iter().enumerate().take(counts.len()) {
            prop_assert_eq!(session.response(i as u32 + 1), Some(*pick));
        }
    }

    #[test]
    fn navigation_never_leaves_prompt_bounds(
        prompt_count in 1usize..=30,
        moves in prop::collection::vec(any::<bool>(), 0..100),
    ) {
        let counts = vec![2usize; prompt_count];
        let instrument = instrument_with(&counts, ScoringMethod::Sum);
        let mut session = Session::with_instrument(&instrument);

        for forward in moves {
            if forward {
                session.advance();
            } else {
                session.retreat();
            }
            prop_assert!(session.current_index() < prompt_count);
        }
    }

    #[test]
    fn every_catalog_score_resolves_to_exactly_one_range(score_seed in 0.0f64..=1.0) {
        for instrument in catalog::all_instruments() {
            let min = instrument.min_possible_score();
            let max = instrument.max_possible_score();
            // An attainable whole score inside the span.
            let score = (min + score_seed * (max - min)).round().clamp(min, max);

            let matches = instrument
                .ranges
                .iter()
                .filter(|r| r.contains(score))
                .count();
            prop_assert_eq!(matches, 1, "instrument {} score {}", &instrument.id, score);
        }
    }
}
