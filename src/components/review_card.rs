//! Testimonial card with a star rating.

#[cfg(test)]
#[path = "review_card_test.rs"]
mod review_card_test;

use leptos::prelude::*;

use crate::net::types::Review;

/// Five-slot star row, clamped to the valid rating range.
fn star_row(rating: i64) -> String {
    #[allow(clippy::cast_sign_loss)]
    let filled = rating.clamp(0, 5) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="review-card">
            <span class="review-card__stars" aria-label=format!("{} out of 5", review.rating)>
                {star_row(review.rating)}
            </span>
            <p class="review-card__body">{review.body}</p>
            <p class="review-card__byline">
                {review.author}
                {review.date.map(|date| format!(", {date}"))}
            </p>
        </div>
    }
}
