//! In-memory food API for integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::{json, Map, Value};

use food_details::api::FoodApi;
use food_details::error::{OrderError, Result};
use food_details::models::{ExtraOption, FoodItem, OrderPayload};
use food_details::screen::{Destination, Navigator};

/// A request the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchFood(u64),
    FetchFavorites,
    AddFavorite(u64),
    RemoveFavorite(u64),
    CreateOrder(u64),
}

#[derive(Default)]
pub struct FakeApi {
    foods: HashMap<u64, FoodItem>,
    favorites: RefCell<Option<Vec<FoodItem>>>,
    calls: RefCell<Vec<Call>>,
    orders: RefCell<Vec<OrderPayload>>,
    pub fail_favorites_read: Cell<bool>,
    pub fail_favorites_write: Cell<bool>,
    pub fail_orders: Cell<bool>,
}

impl FakeApi {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self {
            foods: foods.into_iter().map(|f| (f.id, f)).collect(),
            ..Self::default()
        }
    }

    pub fn with_favorites(self, favorites: Option<Vec<FoodItem>>) -> Self {
        *self.favorites.borrow_mut() = favorites;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn orders(&self) -> Vec<OrderPayload> {
        self.orders.borrow().clone()
    }

    pub fn favorite_ids(&self) -> Vec<u64> {
        self.favorites
            .borrow()
            .as_ref()
            .map(|list| list.iter().map(|f| f.id).collect())
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn server_error(path: &str) -> OrderError {
    OrderError::Status {
        path: path.to_string(),
        status: 500,
    }
}

impl FoodApi for FakeApi {
    async fn fetch_food(&self, id: u64) -> Result<FoodItem> {
        self.record(Call::FetchFood(id));
        self.foods.get(&id).cloned().ok_or(OrderError::Status {
            path: format!("/foods/{}", id),
            status: 404,
        })
    }

    async fn fetch_favorites(&self) -> Result<Option<Vec<FoodItem>>> {
        self.record(Call::FetchFavorites);
        if self.fail_favorites_read.get() {
            return Err(server_error("/favorites"));
        }
        Ok(self.favorites.borrow().clone())
    }

    async fn add_favorite(&self, food: &FoodItem) -> Result<()> {
        self.record(Call::AddFavorite(food.id));
        if self.fail_favorites_write.get() {
            return Err(server_error("/favorites"));
        }
        self.favorites
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(food.clone());
        Ok(())
    }

    async fn remove_favorite(&self, id: u64) -> Result<()> {
        self.record(Call::RemoveFavorite(id));
        if self.fail_favorites_write.get() {
            return Err(server_error(&format!("/favorites/{}", id)));
        }
        if let Some(list) = self.favorites.borrow_mut().as_mut() {
            list.retain(|f| f.id != id);
        }
        Ok(())
    }

    async fn create_order(&self, order: &OrderPayload) -> Result<Value> {
        self.record(Call::CreateOrder(order.product_id));
        if self.fail_orders.get() {
            return Err(server_error("/orders"));
        }
        self.orders.borrow_mut().push(order.clone());

        let mut created = serde_json::to_value(order)?;
        created["id"] = json!(self.orders.borrow().len());
        Ok(created)
    }
}

/// Navigator that remembers every destination it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Vec<Destination>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[Destination] {
        &self.visited
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.visited.push(destination);
    }
}

pub fn food(id: u64, price: f64, extras: &[(u64, &str, f64)]) -> FoodItem {
    let mut other = Map::new();
    other.insert("category".to_string(), json!(1));
    other.insert(
        "thumbnail_url".to_string(),
        json!(format!("https://example.com/{}-thumb.png", id)),
    );

    FoodItem {
        id,
        name: format!("Food {}", id),
        description: "Massa fresca".to_string(),
        price,
        image_url: format!("https://example.com/{}.png", id),
        extras: extras
            .iter()
            .map(|(extra_id, name, value)| ExtraOption {
                id: *extra_id,
                name: name.to_string(),
                value: *value,
            })
            .collect(),
        other,
    }
}
