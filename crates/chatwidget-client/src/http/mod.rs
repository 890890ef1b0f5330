//! reqwest-backed [`WidgetBackend`](crate::WidgetBackend) implementation.

mod api;
mod client;

pub use client::HttpBackend;
