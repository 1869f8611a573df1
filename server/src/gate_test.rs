use super::*;

// =============================================================
// Exclusion set — the gate must not alter these requests
// =============================================================

#[test]
fn api_paths_are_excluded() {
    assert!(is_excluded("/api"));
    assert!(is_excluded("/api/anything"));
    assert!(is_excluded("/api/auth/verify-email"));
}

#[test]
fn asset_paths_are_excluded() {
    assert!(is_excluded("/pkg/reeldeck.wasm"));
    assert!(is_excluded("/favicon.ico"));
    assert!(is_excluded("/healthz"));
    assert!(is_excluded("/robots.txt"));
}

#[test]
fn page_paths_are_not_excluded() {
    assert!(!is_excluded("/"));
    assert!(!is_excluded("/login"));
    assert!(!is_excluded("/movie/42"));
    // Prefix matching is segment-aware, not raw starts_with.
    assert!(!is_excluded("/apiary"));
    assert!(!is_excluded("/pkgs"));
}

// =============================================================
// Public allow-list classification
// =============================================================

#[test]
fn auth_screens_are_public() {
    assert!(is_public("/login"));
    assert!(is_public("/signup"));
    assert!(is_public("/forgot-password"));
    assert!(is_public("/reset-password"));
    assert!(is_public("/verify-email"));
}

#[test]
fn public_matching_includes_sub_paths() {
    assert!(is_public("/login/sso"));
    assert!(!is_public("/loginx"));
}

#[test]
fn protected_paths_are_not_public() {
    assert!(!is_public("/"));
    assert!(!is_public("/browse"));
    assert!(!is_public("/movie/42"));
    assert!(!is_public("/tv/95396"));
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn public_path_without_credential_passes_through() {
    for path in ["/login", "/signup", "/verify-email", "/reset-password"] {
        assert_eq!(decide(path, false), Decision::PassThrough, "path {path:?}");
    }
}

#[test]
fn public_path_with_credential_redirects_home() {
    for path in ["/login", "/signup", "/forgot-password"] {
        assert_eq!(decide(path, true), Decision::RedirectToHome, "path {path:?}");
    }
}

#[test]
fn protected_path_without_credential_redirects_to_login() {
    for path in ["/browse", "/movie/42", "/tv/95396", "/watchlist"] {
        assert_eq!(decide(path, false), Decision::RedirectToLogin, "path {path:?}");
    }
}

#[test]
fn protected_path_with_credential_passes_through() {
    for path in ["/", "/browse", "/movie/42", "/tv/95396"] {
        assert_eq!(decide(path, true), Decision::PassThrough, "path {path:?}");
    }
}

#[test]
fn root_path_without_credential_passes_through() {
    assert_eq!(decide("/", false), Decision::PassThrough);
}

#[test]
fn movie_without_credential_redirects_to_login_target() {
    // The redirect target for signed-out browsers is the login page.
    assert_eq!(decide("/movie/42", false), Decision::RedirectToLogin);
    assert_eq!(LOGIN_PATH, "/login");
}

#[test]
fn login_with_credential_redirects_to_home_target() {
    assert_eq!(decide("/login", true), Decision::RedirectToHome);
    assert_eq!(HOME_PATH, "/");
}

// =============================================================
// Purity — identical inputs give identical outputs
// =============================================================

#[test]
fn decide_is_deterministic() {
    for path in ["/", "/login", "/movie/42", "/browse", "/verify-email"] {
        for credential in [false, true] {
            assert_eq!(
                decide(path, credential),
                decide(path, credential),
                "path {path:?} credential {credential}"
            );
        }
    }
}

#[test]
fn every_input_yields_exactly_one_decision() {
    // Totality: any path shape resolves without panicking.
    for path in ["", "/", "//", "/a/b/c", "/login/", "/LOGIN", "/movie", "/movie/"] {
        for credential in [false, true] {
            let _ = decide(path, credential);
        }
    }
}
