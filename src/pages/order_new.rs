//! Order placement form (authenticated).
//!
//! Placing an order returns a PayPal approval URL; the browser is sent there
//! and comes back through the payment-return page.

#[cfg(test)]
#[path = "order_new_test.rs"]
mod order_new_test;

use leptos::prelude::*;

use crate::components::guard::RequireAuth;
use crate::net::types::{DraftOrder, Subject};
use crate::util::validate::validate_order;

fn build_draft(
    topic: &str,
    subject_id: &str,
    academic_level: &str,
    pages: &str,
    deadline: &str,
    instructions: &str,
) -> Result<DraftOrder, String> {
    let pages = pages
        .trim()
        .parse::<i64>()
        .map_err(|_| "Enter the number of pages.".to_owned())?;
    let draft = DraftOrder {
        topic: topic.trim().to_owned(),
        subject_id: subject_id.to_owned(),
        academic_level: academic_level.to_owned(),
        pages,
        deadline: deadline.trim().to_owned(),
        instructions: instructions.trim().to_owned(),
    };
    validate_order(&draft)?;
    Ok(draft)
}

#[component]
pub fn OrderNewPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <OrderForm/>
        </RequireAuth>
    }
}

#[component]
fn OrderForm() -> impl IntoView {
    let session = expect_context::<crate::app::SessionContext>();
    let subjects = RwSignal::new(Vec::<Subject>::new());
    let topic = RwSignal::new(String::new());
    let subject_id = RwSignal::new(String::new());
    let academic_level = RwSignal::new("undergraduate".to_owned());
    let pages = RwSignal::new("1".to_owned());
    let deadline = RwSignal::new(String::new());
    let instructions = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match session.client().list_subjects().await {
                Ok(items) => subjects.set(items),
                Err(err) => info.set(err.to_string()),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match build_draft(
            &topic.get(),
            &subject_id.get(),
            &academic_level.get(),
            &pages.get(),
            &deadline.get(),
            &instructions.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Placing your order...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.client().place_order(&draft).await {
                    Ok(order) => {
                        let target = order.approval_url.unwrap_or_else(|| "/orders".to_owned());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&target);
                        }
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, session);
        }
    };

    view! {
        <div class="order-page">
            <h1>"Place an order"</h1>
            <form class="order-form" on:submit=on_submit>
                <input
                    class="order-input"
                    type="text"
                    placeholder="Topic, e.g. The Treaty of Westphalia"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
                <select
                    class="order-input"
                    on:change=move |ev| subject_id.set(event_target_value(&ev))
                >
                    <option value="">"Choose a subject"</option>
                    {move || {
                        subjects
                            .get()
                            .into_iter()
                            .map(|subject| {
                                view! { <option value=subject.id>{subject.name}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <select
                    class="order-input"
                    on:change=move |ev| academic_level.set(event_target_value(&ev))
                >
                    <option value="undergraduate">"Undergraduate"</option>
                    <option value="masters">"Master's"</option>
                    <option value="phd">"PhD"</option>
                </select>
                <input
                    class="order-input"
                    type="number"
                    min="1"
                    prop:value=move || pages.get()
                    on:input=move |ev| pages.set(event_target_value(&ev))
                />
                <input
                    class="order-input"
                    type="datetime-local"
                    prop:value=move || deadline.get()
                    on:input=move |ev| deadline.set(event_target_value(&ev))
                />
                <textarea
                    class="order-input order-input--instructions"
                    placeholder="Instructions, formatting style, sources..."
                    prop:value=move || instructions.get()
                    on:input=move |ev| instructions.set(event_target_value(&ev))
                ></textarea>
                <button class="order-button" type="submit" disabled=move || busy.get()>
                    "Continue to payment"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="order-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
