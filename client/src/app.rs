//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_dialog::AuthDialog;
use crate::components::navbar::Navbar;
use crate::pages::{
    browse::BrowsePage, forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    movie::MoviePage, not_found::NotFoundPage, reset_password::ResetPasswordPage,
    signup::SignupPage, tv::TvPage, verify_email::VerifyEmailPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts and sets up client-side routing. The
/// session probe runs once on mount; until it settles, `auth.loading` keeps
/// guards and dialogs quiet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = crate::util::dark_mode::read_preference();
    crate::util::dark_mode::apply(dark);

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState { dark_mode: dark, auth_dialog_open: false });

    provide_context(auth);
    provide_context(ui);

    // Hydrate the session from cookie-backed endpoints.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            let token = if user.is_some() {
                crate::net::api::fetch_session_token().await
            } else {
                None
            };
            auth.update(|a| a.resolve(user, token));
        });
    }

    let close_dialog = Callback::new(move |()| {
        ui.update(|u| u.auth_dialog_open = false);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/reeldeck.css"/>
        <Title text="Reeldeck"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("browse") view=BrowsePage/>
                    <Route path=(StaticSegment("movie"), ParamSegment("id")) view=MoviePage/>
                    <Route path=(StaticSegment("tv"), ParamSegment("id")) view=TvPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                </Routes>
            </main>
            <Show when=move || ui.get().auth_dialog_open>
                <AuthDialog on_cancel=close_dialog/>
            </Show>
        </Router>
    }
}
