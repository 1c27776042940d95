//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form handling,
//! redirects) and delegates rendering details to `components`.

pub mod blog;
pub mod blog_post;
pub mod home;
pub mod login;
pub mod order_new;
pub mod orders;
pub mod payment_return;
pub mod register;
pub mod reviews;
pub mod services;
pub mod verify_email;
