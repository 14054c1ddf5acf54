mod food;
mod order;

pub use food::{Extra, ExtraOption, FoodItem};
pub use order::{OrderPayload, OrderPrice, PriceEncoding};
