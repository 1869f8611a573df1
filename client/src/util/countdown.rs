//! Countdown helpers for timed post-success redirects.
//!
//! DESIGN
//! ======
//! The verify-email page counts down before a full-page navigation home. The
//! arithmetic lives here as pure functions so the interval callback stays a
//! one-liner and the sequence is testable without a browser.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

/// Seconds shown before the post-verification redirect fires.
pub const REDIRECT_DELAY_SECONDS: u32 = 3;

/// Advance the countdown by one second. Saturates at zero.
#[must_use]
pub fn tick(remaining: u32) -> u32 {
    remaining.saturating_sub(1)
}

/// True once the countdown has reached zero and navigation should fire.
#[must_use]
pub fn is_done(remaining: u32) -> bool {
    remaining == 0
}

/// User-facing countdown line rendered under the success message.
#[must_use]
pub fn redirect_message(remaining: u32) -> String {
    if remaining == 1 {
        "Redirecting home in 1 second...".to_owned()
    } else {
        format!("Redirecting home in {remaining} seconds...")
    }
}
