use super::*;

// =============================================================
// tick / is_done
// =============================================================

#[test]
fn tick_counts_down_from_redirect_delay() {
    let mut remaining = REDIRECT_DELAY_SECONDS;
    let mut seen = vec![remaining];
    while !is_done(remaining) {
        remaining = tick(remaining);
        seen.push(remaining);
    }
    assert_eq!(seen, vec![3, 2, 1, 0]);
}

#[test]
fn tick_saturates_at_zero() {
    assert_eq!(tick(0), 0);
}

#[test]
fn is_done_only_at_zero() {
    assert!(is_done(0));
    assert!(!is_done(1));
    assert!(!is_done(REDIRECT_DELAY_SECONDS));
}

// =============================================================
// redirect_message
// =============================================================

#[test]
fn redirect_message_pluralizes() {
    assert_eq!(redirect_message(3), "Redirecting home in 3 seconds...");
    assert_eq!(redirect_message(1), "Redirecting home in 1 second...");
}
