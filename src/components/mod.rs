//! Reusable view components shared across pages.

pub mod footer;
pub mod guard;
pub mod header;
pub mod post_card;
pub mod review_card;
pub mod service_card;
