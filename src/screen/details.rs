use serde_json::Value;

use crate::api::FoodApi;
use crate::error::Result;
use crate::models::{Extra, FoodItem, OrderPayload, OrderPrice, PriceEncoding};
use crate::pricing::{order_total, CurrencyFormat, MIN_FOOD_QUANTITY};
use crate::screen::favorite::FavoriteRequest;
use crate::screen::header::{favorite_icon, HeaderAction, HeaderCommand};
use crate::screen::navigation::{Destination, Navigator};

/// Display and payload settings for a detail flow.
#[derive(Debug, Clone, Default)]
pub struct ScreenConfig {
    pub currency: CurrencyFormat,
    pub price_encoding: PriceEncoding,
}

/// State of one food detail flow, from mount to unmount.
///
/// Quantities only change through the increment/decrement operations, and
/// the favorite flag only through [`FoodDetails::commit_favorite`].
#[derive(Debug, Clone)]
pub struct FoodDetails {
    food: FoodItem,
    formatted_price: String,
    extras: Vec<Extra>,
    is_favorite: bool,
    food_quantity: u32,
    config: ScreenConfig,
}

impl FoodDetails {
    /// Build the initial state from fetched data.
    ///
    /// Every extra starts at quantity zero. The item is a favorite iff its id
    /// appears in `favorites`; missing favorites data means not a favorite.
    pub fn new(food: FoodItem, favorites: Option<&[FoodItem]>, config: ScreenConfig) -> Self {
        let formatted_price = config.currency.format_value(food.price);
        let extras = food.extras_with_quantity();
        let is_favorite = is_in_favorites(food.id, favorites);

        Self {
            food,
            formatted_price,
            extras,
            is_favorite,
            food_quantity: MIN_FOOD_QUANTITY,
            config,
        }
    }

    /// Fetch the item and the favorites list, then build the state.
    pub async fn load<A: FoodApi>(api: &A, food_id: u64, config: ScreenConfig) -> Result<Self> {
        let (food, favorites) = fetch(api, food_id).await?;
        Ok(Self::new(food, favorites.as_deref(), config))
    }

    /// Point the flow at a new route parameter.
    ///
    /// Re-runs the whole load for a different id and is a no-op for the
    /// current one. Item, extras and favorite flag are replaced together once
    /// both fetches succeed; the food quantity is left as it was.
    pub async fn change_route<A: FoodApi>(&mut self, api: &A, food_id: u64) -> Result<bool> {
        if food_id == self.food.id {
            return Ok(false);
        }

        let (food, favorites) = fetch(api, food_id).await?;
        self.formatted_price = self.config.currency.format_value(food.price);
        self.extras = food.extras_with_quantity();
        self.is_favorite = is_in_favorites(food.id, favorites.as_deref());
        self.food = food;
        Ok(true)
    }

    pub fn food(&self) -> &FoodItem {
        &self.food
    }

    /// Unit price as shown to the user.
    pub fn formatted_price(&self) -> &str {
        &self.formatted_price
    }

    /// Extras with their current quantities, in server order.
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Look up an extra by id.
    pub fn extra(&self, id: u64) -> Option<&Extra> {
        self.extras.iter().find(|e| e.id == id)
    }

    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quantities
    // ─────────────────────────────────────────────────────────────────────────

    pub fn increment_food(&mut self) {
        self.food_quantity += 1;
    }

    /// Never goes below one; the item cannot be removed from its own screen.
    pub fn decrement_food(&mut self) {
        if self.food_quantity > MIN_FOOD_QUANTITY {
            self.food_quantity -= 1;
        }
    }

    /// Add one of the extra `id`. Unknown ids are ignored.
    pub fn increment_extra(&mut self, id: u64) {
        if self.extra(id).is_none() {
            return;
        }
        self.extras = self.updated_extras(id, |quantity| quantity + 1);
    }

    /// Remove one of the extra `id`. Ignored for unknown ids and at zero.
    pub fn decrement_extra(&mut self, id: u64) {
        match self.extra(id) {
            Some(extra) if extra.quantity > 0 => {}
            _ => return,
        }
        self.extras = self.updated_extras(id, |quantity| quantity.saturating_sub(1));
    }

    /// Fresh extras collection with `update` applied to the matching entries.
    fn updated_extras(&self, id: u64, update: impl Fn(u32) -> u32) -> Vec<Extra> {
        self.extras
            .iter()
            .map(|extra| {
                if extra.id == id {
                    Extra {
                        quantity: update(extra.quantity),
                        ..extra.clone()
                    }
                } else {
                    extra.clone()
                }
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Total
    // ─────────────────────────────────────────────────────────────────────────

    /// Current order total in the raw numeric domain.
    pub fn total(&self) -> f64 {
        order_total(self.food.price, self.food_quantity, &self.extras)
    }

    /// Current order total as shown to the user.
    pub fn formatted_total(&self) -> String {
        self.config.currency.format_value(self.total())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Favorite
    // ─────────────────────────────────────────────────────────────────────────

    pub fn favorite_icon(&self) -> &'static str {
        favorite_icon(self.is_favorite)
    }

    /// Descriptor for the host's header: current icon plus the toggle command.
    pub fn header_action(&self) -> HeaderAction {
        HeaderAction {
            icon: self.favorite_icon(),
            command: HeaderCommand::ToggleFavorite,
        }
    }

    /// Run a command coming from the header action.
    pub async fn dispatch<A: FoodApi>(&mut self, api: &A, command: HeaderCommand) -> Result<()> {
        match command {
            HeaderCommand::ToggleFavorite => {
                self.toggle_favorite(api).await?;
            }
        }
        Ok(())
    }

    /// Snapshot needed to toggle the favorite flag remotely.
    ///
    /// Borrows the state only for the snapshot; quantities can keep changing
    /// while the request is sent.
    pub fn favorite_request(&self) -> FavoriteRequest {
        FavoriteRequest::new(self.food.clone(), self.is_favorite)
    }

    /// Apply a request the server has confirmed. Returns the current flag.
    ///
    /// Requests taken for another item (the route changed meanwhile) are
    /// ignored.
    pub fn commit_favorite(&mut self, request: &FavoriteRequest) -> bool {
        if request.food_id() == self.food.id {
            self.is_favorite = request.target();
            tracing::info!(
                food_id = self.food.id,
                is_favorite = self.is_favorite,
                "favorite toggled"
            );
        } else {
            tracing::debug!(
                food_id = request.food_id(),
                current = self.food.id,
                "stale favorite request ignored"
            );
        }
        self.is_favorite
    }

    /// Add to or remove from favorites, then flip the local flag.
    ///
    /// The flag changes only after the remote call succeeds; on failure it is
    /// left untouched and the error is returned. Returns the new flag.
    pub async fn toggle_favorite<A: FoodApi>(&mut self, api: &A) -> Result<bool> {
        let request = self.favorite_request();
        request.send(api).await?;
        Ok(self.commit_favorite(&request))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Order
    // ─────────────────────────────────────────────────────────────────────────

    /// Payload for `POST /orders` from the current state.
    ///
    /// Always carries every loaded extra, including those at zero.
    pub fn order_payload(&self) -> OrderPayload {
        let price = match self.config.price_encoding {
            PriceEncoding::Amount => OrderPrice::Amount(self.total()),
            PriceEncoding::Formatted => OrderPrice::Formatted(self.formatted_total()),
        };
        OrderPayload::new(&self.food, self.food_quantity, &self.extras, price)
    }

    /// Submit the order once and leave the screen on success.
    ///
    /// Navigation happens only after the server accepted the order. Returns
    /// the created order as sent back by the server.
    pub async fn finish_order<A: FoodApi, N: Navigator>(
        &self,
        api: &A,
        navigator: &mut N,
    ) -> Result<Value> {
        let payload = self.order_payload();
        let created = api.create_order(&payload).await?;

        tracing::info!(
            product_id = payload.product_id,
            quantity = payload.quantity,
            total = self.total(),
            "order submitted"
        );

        navigator.navigate(Destination::Home);
        Ok(created)
    }
}

/// Fetch the item, then the favorites list.
async fn fetch<A: FoodApi>(api: &A, food_id: u64) -> Result<(FoodItem, Option<Vec<FoodItem>>)> {
    let food = api.fetch_food(food_id).await?;
    if !food.is_valid() {
        tracing::warn!(food_id, "food has a negative price or extra value");
    }

    let favorites = api.fetch_favorites().await?;
    tracing::info!(
        food_id,
        extras = food.extras.len(),
        favorites = favorites.as_ref().map(Vec::len).unwrap_or(0),
        "food loaded"
    );

    Ok((food, favorites))
}

fn is_in_favorites(food_id: u64, favorites: Option<&[FoodItem]>) -> bool {
    favorites
        .map(|list| list.iter().any(|f| f.id == food_id))
        .unwrap_or(false)
}
