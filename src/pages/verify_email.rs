//! Email verification page: OTP entry plus resend.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::validate::{validate_email, validate_otp};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let session = expect_context::<crate::app::SessionContext>();
    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let otp_value = otp.get().trim().to_owned();
        if let Err(message) = validate_email(&email_value).and_then(|()| validate_otp(&otp_value)) {
            info.set(message);
            return;
        }
        busy.set(true);
        info.set("Verifying...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.verify_email(&email_value, &otp_value).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
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
            let _ = (email_value, otp_value, session);
        }
    };

    let on_resend = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if let Err(message) = validate_email(&email_value) {
            info.set(message);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.resend_otp(&email_value).await {
                    Ok(()) => info.set("A new code is on its way.".to_owned()),
                    Err(err) => info.set(err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, session);
        }
    };

    view! {
        <div class="verify-page">
            <div class="verify-card">
                <h1>"Check your inbox"</h1>
                <p class="verify-card__subtitle">
                    "We emailed you a 6-digit code. Enter it below to activate your account."
                </p>
                <form class="verify-form" on:submit=on_verify>
                    <input
                        class="verify-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="verify-input verify-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="482913"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <button class="verify-button" type="submit" disabled=move || busy.get()>
                        "Verify email"
                    </button>
                </form>
                <button class="verify-resend" on:click=on_resend disabled=move || busy.get()>
                    "Resend code"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="verify-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
