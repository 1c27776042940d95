//! Blog index page.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::types::BlogPost;

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::app::SessionContext>().get_value();
        leptos::task::spawn_local(async move {
            match session.client().list_posts().await {
                Ok(items) => posts.set(items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="blog-page">
            <h1>"Writing advice & study notes"</h1>
            <Show when=move || loading.get()>
                <p class="blog-page__loading">"Loading posts..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="blog-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="blog-page__list">
                {move || {
                    posts
                        .get()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
