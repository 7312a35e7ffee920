pub mod feedback;
pub mod references;
pub mod suggest;
pub mod validator;

pub use feedback::{MAX_FEEDBACK_ITEMS, build_feedback};
pub use references::build_references;
pub use suggest::{MAX_SUGGESTIONS, suggest};
pub use validator::{GroundingValidator, NO_DOCS_WARNING, ground_script};
