//! Console flows: multi-request sequences with a single observable outcome.

mod kms;
mod session;

pub use kms::{DeleteStep, KmsScreenState, KmsService, SubmitError, ViewMode};
pub use session::{GuardOutcome, RedirectTarget, SessionGuard};
