//! Single blog post page, rendered from backend Markdown.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::BlogPost;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = RwSignal::new(None::<BlogPost>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::app::SessionContext>().get_value();
        let slug = params.get_untracked().get("slug").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match session.client().fetch_post(&slug).await {
                Ok(found) => post.set(Some(found)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    view! {
        <article class="blog-post-page">
            <Show when=move || error.get().is_some()>
                <p class="blog-post-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                post.get().map(|post| {
                    let body_html = render_markdown_html(&post.body);
                    view! {
                        <h1>{post.title}</h1>
                        <p class="blog-post-page__byline">
                            {post.author}
                            {post.published.map(|date| format!(", {date}"))}
                        </p>
                        <div class="blog-post-page__body" inner_html=body_html></div>
                    }
                })
            }}
        </article>
    }
}
