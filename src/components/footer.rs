//! Site-wide footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__nav">
                <a href="/services">"Services"</a>
                <a href="/blog">"Blog"</a>
                <a href="/reviews">"Reviews"</a>
                <a href="/orders/new">"Place an order"</a>
            </nav>
            <p class="site-footer__note">
                "ScribePoint: research, editing, and writing support for students."
            </p>
        </footer>
    }
}
