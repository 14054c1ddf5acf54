/// Default currency symbol prefixed to formatted amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Default separator between whole units and cents.
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Default separator between groups of three whole-unit digits.
pub const DEFAULT_THOUSANDS_SEPARATOR: char = '.';

/// Digits after the decimal separator.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Starting quantity of the base item; also its floor.
pub const MIN_FOOD_QUANTITY: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Header icon identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Icon shown while the item is a favorite.
pub const FAVORITE_ICON: &str = "favorite";

/// Icon shown while the item is not a favorite.
pub const NOT_FAVORITE_ICON: &str = "favorite-border";

/// Route name of the home tab reached after an order is placed.
pub const HOME_ROUTE: &str = "MainBottom";
