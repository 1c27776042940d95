//! Account registration page.
//!
//! Registration issues no tokens; on success the user is routed to the
//! email-verification step.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::util::auth::encode_query_component;
use crate::util::validate::{validate_email, validate_password, validate_username};

fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), String> {
    validate_username(username)?;
    validate_email(email)?;
    validate_password(password)?;
    Ok((username.trim().to_owned(), email.trim().to_owned(), password.to_owned()))
}

fn verify_email_target(email: &str) -> String {
    format!("/verify-email?email={}", encode_query_component(email))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<crate::app::SessionContext>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, email_value, password_value) =
            match validate_registration(&username.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message);
                    return;
                }
            };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.register(&username_value, &email_value, &password_value).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&verify_email_target(&email_value));
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
            let _ = (username_value, email_value, password_value, session);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create your account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <p class="register-card__footer">
                    "Already registered? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
