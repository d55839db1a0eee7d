pub mod error;
pub mod glitch;
pub mod record;

pub use error::{CatalogError, Result};
pub use glitch::{GlitchIssue, MAX_GLITCH_SCORE, RecordField};
pub use record::{CanonicalRecord, RawCategory, RawPrice, RawRecord, RawStock};
