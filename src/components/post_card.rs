//! Blog list card linking to the full post.

use leptos::prelude::*;

use crate::net::types::BlogPost;

#[component]
pub fn PostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    view! {
        <a class="post-card" href=href>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <p class="post-card__byline">
                {post.author}
                {post.published.map(|date| format!(", {date}"))}
            </p>
        </a>
    }
}
