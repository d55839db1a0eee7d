//! CLI library components for Catalog Quality.

pub mod logging;
