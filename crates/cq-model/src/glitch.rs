use serde::{Deserialize, Serialize};

/// Upper bound for a record's glitch score. Per-field penalties are summed
/// and clamped to this value, never subtracted.
pub const MAX_GLITCH_SCORE: u8 = 100;

/// The raw record field a glitch issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Name,
    Price,
    Stock,
    Category,
    UpdatedAt,
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordField::Name => write!(f, "name"),
            RecordField::Price => write!(f, "price"),
            RecordField::Stock => write!(f, "stock"),
            RecordField::Category => write!(f, "category"),
            RecordField::UpdatedAt => write!(f, "updatedAt"),
        }
    }
}

/// One defect found while normalizing a raw record.
///
/// Issues are immutable once created and are appended to a record's glitch
/// report in field discovery order (name → price → stock → category →
/// updatedAt); that order is part of the observable contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlitchIssue {
    /// Field the issue was discovered on.
    pub field: RecordField,
    /// Human-readable description of the defect.
    pub message: String,
}

impl GlitchIssue {
    pub fn new(field: RecordField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
