//! Review wizard: upload, per-layer review, final report.
//!
//! [`Navigator`] is independent of any rendering; the TUI drives it from
//! key events and the tests drive it directly.

mod navigator;
mod upload;

pub use navigator::{Action, BlockReason, Navigator, Screen, SessionState, Transition};
pub use upload::{ADVERTISED_EXTENSIONS, ADVERTISED_FORMATS, UploadedFile};
