pub mod calculations;
pub mod constants;
pub mod format;

pub use calculations::{extras_cost, order_total};
pub use constants::*;
pub use format::CurrencyFormat;
