//! **A guided, multi-layer compliance review for Electronic Health Record documents.**
//!
//! `ehr-compliance` walks a reviewer through four fixed compliance layers
//! (privacy and policy, interoperability, security, ABDM integration), shows
//! each layer's score, checks, coverage radar and findings, gates forward
//! progress on a minimum score, and ends with an aggregated final report.
//!
//! The review data is a constant reference table: no document content is
//! parsed or analyzed. It powers an interactive terminal UI and a
//! non-interactive `report` command.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`Catalog`] of four [`LayerRecord`]s with their checks,
//!   radar points and findings, plus the final recommendations.
//! - **[`wizard`]**: the [`Navigator`] state machine (`home -> layer -> final`)
//!   and the proceed gate.
//! - **[`quality`]**: score bands, per-layer statistics and the
//!   [`ComplianceSummary`] shown on the final screen.
//! - **[`reports`]**: summary, JSON and Markdown renderings of the final report.
//! - **[`tui`]**: the interactive wizard built on `ratatui`.
//!
//! ## Walking the Wizard Programmatically
//!
//! ```
//! use ehr_compliance::{Catalog, Navigator, Screen, UploadedFile};
//!
//! let mut nav = Navigator::new(Catalog::builtin());
//! if let Some(file) = UploadedFile::from_input("patient_record.pdf") {
//!     nav.select_file(file);
//! }
//! nav.start_analysis();
//! assert_eq!(nav.screen(), Screen::Layer);
//!
//! while nav.screen() == Screen::Layer {
//!     assert!(nav.can_proceed());
//!     nav.advance();
//! }
//! assert_eq!(nav.screen(), Screen::Final);
//! ```
//!
//! ## Producing the Final Report
//!
//! ```
//! use ehr_compliance::{Catalog, ComplianceSummary, ReportConfig, ReportFormat};
//! use ehr_compliance::reports::create_reporter;
//!
//! let catalog = Catalog::builtin();
//! let summary = ComplianceSummary::from_catalog(&catalog);
//! assert_eq!(summary.overall_score, 81);
//!
//! let markdown = create_reporter(ReportFormat::Markdown)
//!     .generate(&catalog, &summary, &ReportConfig::default())
//!     .unwrap();
//! assert!(markdown.contains("| Overall score | 81% (good) |"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: TUI layout math casts between usize and u16
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // Config and state structs legitimately use bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod quality;
pub mod reports;
pub mod tui;
pub mod wizard;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TuiConfig, Validatable};
pub use config::{BehaviorConfig, CatalogConfig, OutputConfig};
pub use error::{ComplianceError, ErrorContext, Result};
pub use model::{
    Catalog, Check, CheckStatus, Finding, LayerKind, LayerRecord, RadarPoint, Recommendation,
    Severity,
};
pub use quality::{ComplianceSummary, LayerScore, ScoreBand, can_proceed};
pub use reports::{ReportConfig, ReportFormat, ReportGenerator};
pub use wizard::{Navigator, Screen, SessionState, Transition, UploadedFile};
