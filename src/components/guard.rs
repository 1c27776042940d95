//! Route guard wrapper for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes render nothing while the session bootstraps, then either
//! show their content or redirect to login with the requested path as the
//! `next` return target.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Renders children only for authenticated sessions.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let requested = use_location().pathname.get_untracked();
    install_unauth_redirect(session_state, requested, navigate);

    view! {
        {move || session_state.get().is_authenticated().then(|| children())}
    }
}
