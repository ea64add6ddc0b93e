//! Player data API over the browser's fetch

mod gloo_client;

pub use gloo_client::GlooPlayerApi;
