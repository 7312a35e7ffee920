pub mod entry;
pub mod error;
pub mod index;
pub mod lookup;
pub mod report;

pub use entry::{AccessMode, DocEntry, DocEntryKind, DocIndexFile};
pub use error::{ModelError, Result};
pub use index::DocIndex;
pub use lookup::CaseInsensitiveLookup;
pub use report::{GroundingReport, UnverifiedIdentifier, VerifiedIdentifier};
