//! The review wizard state machine.
//!
//! ```text
//!   home --start (file selected)--> layer[0]
//!   layer[i] --advance (score >= 70, i < last)--> layer[i+1]
//!   layer[last] --advance (score >= 70)--> final
//!   layer[i] --cancel--> home      (file and index cleared)
//!   final --restart--> home        (file and index cleared)
//!   any --reset--> home            (file and index cleared)
//! ```
//!
//! Operations that are not allowed in the current state leave the session
//! untouched and report why through [`Transition::Blocked`].

use super::upload::UploadedFile;
use crate::model::{Catalog, LayerRecord};
use crate::quality::{PROCEED_THRESHOLD, can_proceed};
use std::fmt;

/// Wizard stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Layer,
    Final,
}

impl Screen {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Layer => "layer",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The whole of the mutable wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub screen: Screen,
    pub uploaded_file: Option<UploadedFile>,
    /// Meaningful only while `screen` is [`Screen::Layer`].
    pub current_layer_index: usize,
}

impl SessionState {
    /// Whether this is the start-of-session state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

/// User actions that drive the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectFile,
    Start,
    Advance,
    Cancel,
    Restart,
    Reset,
}

impl Action {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectFile => "select file",
            Self::Start => "start analysis",
            Self::Advance => "advance",
            Self::Cancel => "cancel analysis",
            Self::Restart => "start new analysis",
            Self::Reset => "reset",
        }
    }
}

/// Why an action left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Start requested with no file selected
    NoFileSelected,
    /// Active layer score is under the proceed threshold
    BelowThreshold { score: u8, threshold: u8 },
    /// Action has no meaning on this screen
    NotAvailable { action: Action, screen: Screen },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileSelected => f.write_str("Select a file before starting the analysis"),
            Self::BelowThreshold { score, threshold } => {
                write!(f, "Score below threshold ({threshold}%): layer scored {score}%")
            }
            Self::NotAvailable { action, screen } => {
                write!(f, "Cannot {} from the {} screen", action.name(), screen)
            }
        }
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Screen (or layer index) changed
    Moved { from: Screen, to: Screen },
    /// State changed without changing screen
    Updated,
    /// Nothing changed
    Blocked(BlockReason),
}

impl Transition {
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Owns the session state and the catalog it walks through.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    state: SessionState,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Navigator {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: SessionState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.state.screen
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.state.uploaded_file.as_ref()
    }

    #[must_use]
    pub const fn current_layer_index(&self) -> usize {
        self.state.current_layer_index
    }

    /// The layer under review, only while on the layer screen.
    #[must_use]
    pub fn current_layer(&self) -> Option<&LayerRecord> {
        match self.state.screen {
            Screen::Layer => self.catalog.layer(self.state.current_layer_index),
            Screen::Home | Screen::Final => None,
        }
    }

    /// Whether the current layer is the last one before the final report.
    #[must_use]
    pub fn is_last_layer(&self) -> bool {
        self.state.current_layer_index + 1 >= self.catalog.len()
    }

    /// Whether the start action is enabled.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.state.screen == Screen::Home && self.state.uploaded_file.is_some()
    }

    /// Whether the advance action is enabled.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.current_layer().is_some_and(can_proceed)
    }

    /// Store the selected file, replacing any earlier selection.
    pub fn select_file(&mut self, file: UploadedFile) -> Transition {
        if self.state.screen != Screen::Home {
            return self.blocked(BlockReason::NotAvailable {
                action: Action::SelectFile,
                screen: self.state.screen,
            });
        }
        tracing::debug!("Selected file {}", file.name());
        self.state.uploaded_file = Some(file);
        Transition::Updated
    }

    /// Begin reviewing from the first layer.
    pub fn start_analysis(&mut self) -> Transition {
        if self.state.screen != Screen::Home {
            return self.blocked(BlockReason::NotAvailable {
                action: Action::Start,
                screen: self.state.screen,
            });
        }
        if self.state.uploaded_file.is_none() {
            return self.blocked(BlockReason::NoFileSelected);
        }
        self.state.current_layer_index = 0;
        self.move_to(Screen::Layer)
    }

    /// Go to the next layer, or to the final report after the last one.
    pub fn advance(&mut self) -> Transition {
        let Some(layer) = self.current_layer() else {
            return self.blocked(BlockReason::NotAvailable {
                action: Action::Advance,
                screen: self.state.screen,
            });
        };
        if !can_proceed(layer) {
            let reason = BlockReason::BelowThreshold {
                score: layer.score,
                threshold: PROCEED_THRESHOLD,
            };
            return self.blocked(reason);
        }

        if self.is_last_layer() {
            self.move_to(Screen::Final)
        } else {
            self.state.current_layer_index += 1;
            self.move_to(Screen::Layer)
        }
    }

    /// Abandon the review and return home.
    pub fn cancel(&mut self) -> Transition {
        if self.state.screen != Screen::Layer {
            return self.blocked(BlockReason::NotAvailable {
                action: Action::Cancel,
                screen: self.state.screen,
            });
        }
        self.clear_and_go_home()
    }

    /// Leave the final report and start over.
    pub fn restart(&mut self) -> Transition {
        if self.state.screen != Screen::Final {
            return self.blocked(BlockReason::NotAvailable {
                action: Action::Restart,
                screen: self.state.screen,
            });
        }
        self.clear_and_go_home()
    }

    /// Return to the initial state from any screen.
    pub fn reset(&mut self) -> Transition {
        self.clear_and_go_home()
    }

    /// `(position, total)` of the layer under review, 1-based.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_layer_index + 1, self.catalog.len())
    }

    fn clear_and_go_home(&mut self) -> Transition {
        self.state.uploaded_file = None;
        self.state.current_layer_index = 0;
        self.move_to(Screen::Home)
    }

    fn move_to(&mut self, to: Screen) -> Transition {
        let from = self.state.screen;
        self.state.screen = to;
        tracing::debug!(
            "Wizard {} -> {} (layer index {})",
            from,
            to,
            self.state.current_layer_index
        );
        Transition::Moved { from, to }
    }

    fn blocked(&self, reason: BlockReason) -> Transition {
        tracing::debug!("Wizard action blocked on {}: {}", self.state.screen, reason);
        Transition::Blocked(reason)
    }
}
