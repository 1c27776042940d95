//! Service catalog page.

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::net::types::ServiceOffering;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let offerings = RwSignal::new(Vec::<ServiceOffering>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::app::SessionContext>().get_value();
        leptos::task::spawn_local(async move {
            match session.client().list_services().await {
                Ok(items) => offerings.set(items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="services-page">
            <h1>"Our services"</h1>
            <Show when=move || loading.get()>
                <p class="services-page__loading">"Loading services..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="services-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="services-page__grid">
                {move || {
                    offerings
                        .get()
                        .into_iter()
                        .map(|offering| view! { <ServiceCard offering=offering/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
