//! Customer reviews / testimonials page.

use leptos::prelude::*;

use crate::components::review_card::ReviewCard;
use crate::net::types::Review;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let reviews = RwSignal::new(Vec::<Review>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::app::SessionContext>().get_value();
        leptos::task::spawn_local(async move {
            match session.client().list_reviews().await {
                Ok(items) => reviews.set(items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="reviews-page">
            <h1>"Student reviews"</h1>
            <Show when=move || loading.get()>
                <p class="reviews-page__loading">"Loading reviews..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="reviews-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="reviews-page__list">
                {move || {
                    reviews
                        .get()
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
