//! Glitch scoring: penalty aggregation and issue collection.

use cq_model::{GlitchIssue, MAX_GLITCH_SCORE};

use crate::fields::FieldOutcome;

/// Accumulates per-field penalties and issues while a record is normalized.
///
/// Issues end up in the order outcomes are absorbed, which is how the
/// engine enforces the fixed field discovery order. Penalties only ever
/// add; the final score is the sum clamped to
/// [`MAX_GLITCH_SCORE`](cq_model::MAX_GLITCH_SCORE).
#[derive(Debug, Default)]
pub struct GlitchTally {
    penalties: u32,
    issues: Vec<GlitchIssue>,
}

impl GlitchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field outcome and hand back its canonical value.
    pub fn absorb<T>(&mut self, outcome: FieldOutcome<T>) -> T {
        self.penalties += outcome.penalty;
        if let Some(issue) = outcome.issue {
            self.issues.push(issue);
        }
        outcome.value
    }

    /// Final clamped score and the ordered issue list.
    pub fn finish(self) -> (u8, Vec<GlitchIssue>) {
        let score = self.penalties.min(u32::from(MAX_GLITCH_SCORE)) as u8;
        (score, self.issues)
    }
}
