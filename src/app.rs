//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::net::client::{ApiClient, GlooTransport};
use crate::pages::{
    blog::BlogPage, blog_post::BlogPostPage, home::HomePage, login::LoginPage,
    order_new::OrderNewPage, orders::OrdersPage, payment_return::PaymentReturnPage,
    register::RegisterPage, reviews::ReviewsPage, services::ServicesPage,
    verify_email::VerifyEmailPage,
};
use crate::state::auth::SessionState;
use crate::state::session::Session;
use crate::util::auth::redirect_to_login;
use crate::util::storage::{BrowserStore, TokenStore};

/// The per-tab session container over the browser transport and storage.
pub type AppSession = Session<GlooTransport, BrowserStore>;

/// Context handle for the session. The session holds `Rc`s, so it rides
/// context through an arena-keyed local `StoredValue` rather than directly.
pub type SessionContext = StoredValue<AppSession, LocalStorage>;

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
/// Provides the session state signal and the session container as contexts,
/// kicks off the one-shot bootstrap, and declares client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_state = RwSignal::new(SessionState::bootstrapping());
    let session: AppSession = Session::new(ApiClient::new(
        GlooTransport::new(),
        TokenStore::new(BrowserStore),
        Rc::new(redirect_to_login),
    ));
    provide_context(session_state);
    provide_context(StoredValue::new_local(session.clone()));

    // Resolve the persisted session once at startup.
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let state = session.bootstrap().await;
            session_state.set(state);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    session_state.set(SessionState::anonymous());

    view! {
        <Stylesheet id="leptos" href="/pkg/scribepoint-web.css"/>
        <Title text="ScribePoint"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("reviews") view=ReviewsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=(StaticSegment("orders"), StaticSegment("new")) view=OrderNewPage/>
                    <Route path=(StaticSegment("payment"), StaticSegment("return")) view=PaymentReturnPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
