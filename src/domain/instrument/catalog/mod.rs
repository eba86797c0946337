//! Fixed catalog of screening instruments.
//!
//! Instrument content is authored here as static configuration, one module
//! per instrument. The catalog is read-only; the only failure mode is an
//! unknown identifier.

mod beck_anxiety;
mod gad7;
mod perceived_stress;
mod phq9;

use once_cell::sync::Lazy;

use super::{DefinitionError, Instrument};

static CATALOG: Lazy<Vec<Instrument>> = Lazy::new(|| {
    vec![
        phq9::definition(),
        gad7::definition(),
        beck_anxiety::definition(),
        perceived_stress::definition(),
    ]
});

/// All registered instruments, in display order.
pub fn all_instruments() -> &'static [Instrument] {
    &CATALOG
}

/// Look up an instrument by slug.
pub fn instrument(id: &str) -> Option<&'static Instrument> {
    CATALOG.iter().find(|i| i.id == id)
}

/// Validates every catalog entry.
///
/// Run at server startup so a malformed definition fails loudly before any
/// respondent can reach it.
pub fn validate_catalog() -> Result<(), DefinitionError> {
    for instrument in CATALOG.iter() {
        instrument.validate()?;
    }
    Ok(())
}
