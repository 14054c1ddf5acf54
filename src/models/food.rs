use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A menu item as served by `GET /foods/{id}`.
///
/// Fields this crate does not interpret (category, thumbnail, ...) are kept in
/// `other` and sent back untouched with favorites and orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub extras: Vec<ExtraOption>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// An add-on as listed by the server, without any local quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub id: u64,
    pub name: String,
    pub value: f64,
}

/// An add-on with the quantity the user picked on this screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    pub value: f64,
    pub quantity: u32,
}

impl FoodItem {
    /// Extras with every quantity reset to zero, in server order.
    pub fn extras_with_quantity(&self) -> Vec<Extra> {
        self.extras.iter().map(Extra::from).collect()
    }

    /// Basic validation: non-negative price and extra values.
    pub fn is_valid(&self) -> bool {
        self.price >= 0.0 && self.extras.iter().all(|e| e.value >= 0.0)
    }
}

impl From<&ExtraOption> for Extra {
    fn from(option: &ExtraOption) -> Self {
        Self {
            id: option.id,
            name: option.name.clone(),
            value: option.value,
            quantity: 0,
        }
    }
}

impl Extra {
    /// Cost of this extra at its current quantity.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.value * self.quantity as f64
    }
}
