//! Display formatting for the presentation layer.

mod num;

pub use num::{format_pct, format_price, format_usd};
