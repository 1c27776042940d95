//! PayPal return page: captures the payment identified by the URL query.
//!
//! PayPal redirects back with `?token=<payment id>` and, when the order flow
//! seeded it, an `order_id`. Both are posted to the capture endpoint; the
//! backend treats a missing order id as "resolve from the payment".

#[cfg(test)]
#[path = "payment_return_test.rs"]
mod payment_return_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Clone, Debug, PartialEq, Eq)]
enum CapturePhase {
    Capturing,
    Succeeded { order_id: Option<String> },
    Failed(String),
}

/// Pull the capture parameters out of the return URL. The payment token is
/// required; an absent or empty `order_id` is passed through as `None`.
fn return_params(
    token: Option<String>,
    order_id: Option<String>,
) -> Result<(String, Option<String>), String> {
    match token {
        Some(token) if !token.trim().is_empty() => {
            Ok((token, order_id.filter(|id| !id.trim().is_empty())))
        }
        _ => Err("The payment return link is missing its token.".to_owned()),
    }
}

#[component]
pub fn PaymentReturnPage() -> impl IntoView {
    let query = use_query_map();
    let phase = RwSignal::new(CapturePhase::Capturing);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::app::SessionContext>().get_value();
        let params = query.get_untracked();
        leptos::task::spawn_local(async move {
            let (payment_id, order_id) =
                match return_params(params.get("token"), params.get("order_id")) {
                    Ok(values) => values,
                    Err(message) => {
                        phase.set(CapturePhase::Failed(message));
                        return;
                    }
                };
            match session.client().capture_payment(&payment_id, order_id.as_deref()).await {
                Ok(resp) => phase.set(CapturePhase::Succeeded { order_id: resp.order_id }),
                Err(err) => phase.set(CapturePhase::Failed(err.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = query;

    view! {
        <div class="payment-page">
            {move || match phase.get() {
                CapturePhase::Capturing => view! {
                    <div class="payment-page__pending">
                        <h1>"Confirming your payment..."</h1>
                        <p>"Hold tight, this only takes a moment."</p>
                    </div>
                }
                .into_any(),
                CapturePhase::Succeeded { order_id } => view! {
                    <div class="payment-page__success">
                        <h1>"Payment received"</h1>
                        <p>
                            "Your order is confirmed"
                            {order_id.map(|id| format!(" (order {id})"))} "."
                        </p>
                        <a href="/orders">"Back to my orders"</a>
                    </div>
                }
                .into_any(),
                CapturePhase::Failed(message) => view! {
                    <div class="payment-page__failure">
                        <h1>"Payment not completed"</h1>
                        <p>{message}</p>
                        <a href="/orders">"Back to my orders"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
