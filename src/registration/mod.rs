//! Team registration workflow.
//!
//! - `form`: the draft and the synchronous edits on it
//! - `step`: wizard navigation, gated on team info and name uniqueness
//! - `pipeline`: ordered submission against a
//!   [`RegistrationBackend`](crate::backend::RegistrationBackend)
//! - `render`: terminal views
//! - `payment`: demo payment step

pub mod context;
pub mod draft;
pub mod form;
pub mod payload;
pub mod payment;
pub mod pipeline;
pub mod render;
pub mod step;

pub use context::SelectionContext;
pub use draft::{PlayerDraft, PlayerUpdate, RegistrationDraft};
pub use form::{FormState, RegistrationOutcome};
pub use pipeline::{submit, CompetitionNames, SubmissionReport};
pub use step::Step;
