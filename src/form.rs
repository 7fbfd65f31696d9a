//! Query form state
//!
//! The submission lifecycle `Idle -> Submitting -> {Answered | Failed}` as a
//! single enum, so an answer and an error can never be shown together.

pub mod form_state;

pub use form_state::{BadgeTone, FormState};
