mod details;
mod favorite;
mod header;
mod navigation;

pub use details::{FoodDetails, ScreenConfig};
pub use header::{favorite_icon, HeaderAction, HeaderCommand};
pub use favorite::FavoriteRequest;
pub use navigation::{ConsoleNavigator, Destination, Navigator};
