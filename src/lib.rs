pub mod api;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod screen;

pub use error::{OrderError, Result};
pub use models::{Extra, ExtraOption, FoodItem, OrderPayload};
pub use screen::{Destination, FoodDetails, Navigator};
