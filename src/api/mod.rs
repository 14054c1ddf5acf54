//! Remote food API.
//!
//! [`FoodApi`] is the seam between the order flow and the backend. The
//! command-line binary talks HTTP through [`HttpFoodApi`]; tests plug in an
//! in-memory double.

mod http;

use std::future::Future;

use serde_json::Value;

use crate::error::Result;
use crate::models::{FoodItem, OrderPayload};

pub use http::{parse_favorites, HttpFoodApi};

/// Operations the detail flow needs from the backend.
pub trait FoodApi {
    /// `GET /foods/{id}`.
    fn fetch_food(&self, id: u64) -> impl Future<Output = Result<FoodItem>>;

    /// `GET /favorites`. `None` when the server returns no data at all.
    fn fetch_favorites(&self) -> impl Future<Output = Result<Option<Vec<FoodItem>>>>;

    /// `POST /favorites` with the full item.
    fn add_favorite(&self, food: &FoodItem) -> impl Future<Output = Result<()>>;

    /// `DELETE /favorites/{id}`.
    fn remove_favorite(&self, id: u64) -> impl Future<Output = Result<()>>;

    /// `POST /orders`. The created order is returned as-is.
    fn create_order(&self, order: &OrderPayload) -> impl Future<Output = Result<Value>>;
}
