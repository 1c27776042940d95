//! Customer order history page (authenticated).

use leptos::prelude::*;

use crate::components::guard::RequireAuth;
use crate::net::types::Order;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <OrdersList/>
        </RequireAuth>
    }
}

#[component]
fn OrdersList() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::app::SessionContext>().get_value();
        leptos::task::spawn_local(async move {
            match session.client().list_orders().await {
                Ok(items) => orders.set(items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="orders-page">
            <div class="orders-page__head">
                <h1>"My orders"</h1>
                <a class="orders-page__new" href="/orders/new">"New order"</a>
            </div>
            <Show when=move || loading.get()>
                <p class="orders-page__loading">"Loading orders..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="orders-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() && orders.get().is_empty() && error.get().is_none()>
                <p class="orders-page__empty">
                    "Nothing here yet. " <a href="/orders/new">"Place your first order."</a>
                </p>
            </Show>
            <table class="orders-table">
                <tbody>
                    {move || {
                        orders
                            .get()
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <tr class="orders-table__row">
                                        <td>{order.topic}</td>
                                        <td>{order.subject}</td>
                                        <td>{format!("{} pages", order.pages)}</td>
                                        <td>{order.deadline}</td>
                                        <td>{format!("${}", order.price)}</td>
                                        <td>{order.status}</td>
                                        <td>
                                            {order.approval_url.map(|url| {
                                                view! { <a class="orders-table__pay" href=url>"Pay now"</a> }
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
