use crate::models::Extra;

/// Cost of the extras at their current quantities.
pub fn extras_cost(extras: &[Extra]) -> f64 {
    extras.iter().map(Extra::subtotal).sum()
}

/// Order total: unit price times quantity plus every extra's subtotal.
pub fn order_total(unit_price: f64, food_quantity: u32, extras: &[Extra]) -> f64 {
    unit_price * food_quantity as f64 + extras_cost(extras)
}
