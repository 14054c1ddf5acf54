use crate::api::FoodApi;
use crate::error::Result;
use crate::models::FoodItem;

/// A pending favorite toggle, detached from the flow's state.
///
/// Holds its own snapshot of the item, so the flow stays free for quantity
/// edits while [`FavoriteRequest::send`] is in flight. The result is applied
/// with `FoodDetails::commit_favorite`.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteRequest {
    food: FoodItem,
    was_favorite: bool,
}

impl FavoriteRequest {
    pub(crate) fn new(food: FoodItem, was_favorite: bool) -> Self {
        Self { food, was_favorite }
    }

    pub fn food_id(&self) -> u64 {
        self.food.id
    }

    /// Flag at the time the request was taken.
    pub fn was_favorite(&self) -> bool {
        self.was_favorite
    }

    /// Flag once the request has been confirmed by the server.
    pub fn target(&self) -> bool {
        !self.was_favorite
    }

    /// Remove from favorites if it was one, add the item otherwise.
    pub async fn send<A: FoodApi>(&self, api: &A) -> Result<()> {
        if self.was_favorite {
            api.remove_favorite(self.food.id).await
        } else {
            api.add_favorite(&self.food).await
        }
    }
}
