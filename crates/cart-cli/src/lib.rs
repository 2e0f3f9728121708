//! Library components of the `cart-convert` CLI.

pub mod export;
pub mod logging;
pub mod pipeline;
