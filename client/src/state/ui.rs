//! Local UI chrome state (theme, auth dialog visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state (`auth`) so
//! chrome controls can evolve independently of identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navbar theme toggle and the sign-in dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub auth_dialog_open: bool,
}
