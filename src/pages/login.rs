//! Login page supporting credential and Google sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[cfg(feature = "hydrate")]
use crate::state::auth::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::auth::next_or_default;

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session_state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<crate::app::SessionContext>();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            let next = next_or_default(query.get_untracked().get("next").as_deref());
            leptos::task::spawn_local(async move {
                match session.login(&username_value, &password_value).await {
                    Ok(user) => {
                        session_state.set(SessionState::authenticated(user));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&next);
                        }
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, query, session);
        }
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Contacting Google...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::GoogleLoginOutcome;
            use crate::util::oauth::{GisTokenProvider, TokenProvider};

            let session = session.get_value();
            let next = next_or_default(query.get_untracked().get("next").as_deref());
            leptos::task::spawn_local(async move {
                let config = match session.client().google_config().await {
                    Ok(config) => config,
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                        return;
                    }
                };
                let token = match GisTokenProvider::new(config.client_id).obtain_token().await {
                    Ok(token) => token,
                    Err(message) => {
                        info.set(message);
                        busy.set(false);
                        return;
                    }
                };
                match session.login_with_google(&token).await {
                    GoogleLoginOutcome::Success { user, created } => {
                        if created {
                            leptos::logging::log!("created account via google exchange");
                        }
                        session_state.set(SessionState::authenticated(user));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&next);
                        }
                    }
                    GoogleLoginOutcome::Failed { message } => {
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-button login-button--google" on:click=on_google disabled=move || busy.get()>
                    "Sign in with Google"
                </button>
                <p class="login-card__footer">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
