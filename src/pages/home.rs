//! Marketing landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Academic writing support, on your deadline"</h1>
                <p class="home-hero__subtitle">
                    "Research papers, essays, editing, and proofreading by subject specialists."
                </p>
                <div class="home-hero__actions">
                    <a class="home-hero__cta" href="/orders/new">"Place an order"</a>
                    <a class="home-hero__secondary" href="/services">"Browse services"</a>
                </div>
            </section>
            <section class="home-highlights">
                <div class="home-highlight">
                    <h3>"Subject specialists"</h3>
                    <p>"Writers matched to your field, from history to data science."</p>
                </div>
                <div class="home-highlight">
                    <h3>"Deadline-first"</h3>
                    <p>"Pick the date, we work backwards from it."</p>
                </div>
                <div class="home-highlight">
                    <h3>"Revisions included"</h3>
                    <p>"Every order ships with free revision rounds."</p>
                </div>
            </section>
            <section class="home-social-proof">
                <a href="/reviews">"See what students say →"</a>
            </section>
        </div>
    }
}
