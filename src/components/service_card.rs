//! Catalog card for a single service offering.

use leptos::prelude::*;

use crate::net::types::ServiceOffering;

#[component]
pub fn ServiceCard(offering: ServiceOffering) -> impl IntoView {
    view! {
        <div class="service-card">
            <h3 class="service-card__name">{offering.name}</h3>
            <p class="service-card__description">{offering.description}</p>
            <p class="service-card__price">"From $" {offering.price_from} " per page"</p>
            <a class="service-card__cta" href="/orders/new">"Order now"</a>
        </div>
    }
}
