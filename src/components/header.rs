//! Site-wide navigation header with auth-aware actions.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::state::auth::SessionState;

#[component]
pub fn Header() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let session = expect_context::<SessionContext>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let state = session.logout().await;
                session_state.set(state);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    let username = move || {
        session_state
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"ScribePoint"</a>
            <nav class="site-header__nav">
                <a href="/services">"Services"</a>
                <a href="/blog">"Blog"</a>
                <a href="/reviews">"Reviews"</a>
            </nav>
            <div class="site-header__auth">
                <Show
                    when=move || session_state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="site-header__login" href="/login">"Log in"</a>
                            <a class="site-header__cta" href="/register">"Get started"</a>
                        }
                    }
                >
                    <span class="site-header__user">{username}</span>
                    <a href="/orders">"My orders"</a>
                    <button class="site-header__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
