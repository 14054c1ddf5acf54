use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Extra, FoodItem};

/// How the order total is written into the `price` field of `POST /orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceEncoding {
    /// Raw numeric total.
    #[default]
    Amount,

    /// Display string from the currency formatter, for backends that expect it.
    Formatted,
}

/// Value of the `price` field in an order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderPrice {
    Amount(f64),
    Formatted(String),
}

/// Body of `POST /orders`.
///
/// The item's own id travels as `product_id`; every other item field is
/// copied, with `price` replaced by the order total and `extras` by the
/// quantified snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub product_id: u64,

    pub name: String,

    pub description: String,

    pub image_url: String,

    pub price: OrderPrice,

    pub quantity: u32,

    pub extras: Vec<Extra>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Keys the payload sets itself. Item fields with these names are dropped so
/// they cannot shadow the order's own values.
pub const RESERVED_ORDER_KEYS: [&str; 9] = [
    "id",
    "product_id",
    "name",
    "description",
    "image_url",
    "price",
    "quantity",
    "extras",
    "formattedPrice",
];

impl OrderPayload {
    /// Assemble the payload from the item, the chosen quantities and the total.
    pub fn new(food: &FoodItem, quantity: u32, extras: &[Extra], price: OrderPrice) -> Self {
        let other = food
            .other
            .iter()
            .filter(|(key, _)| !RESERVED_ORDER_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            image_url: food.image_url.clone(),
            price,
            quantity,
            extras: extras.to_vec(),
            other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        let mut other = Map::new();
        other.insert("category".to_string(), Value::from(2));
        FoodItem {
            id: 7,
            name: "Veggie".to_string(),
            description: "Salada".to_string(),
            price: 21.0,
            image_url: "https://example.com/veggie.png".to_string(),
            extras: Vec::new(),
            other,
        }
    }

    #[test]
    fn test_payload_moves_id_to_product_id() {
        let payload = OrderPayload::new(&sample_food(), 1, &[], OrderPrice::Amount(21.0));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["product_id"], 7);
        assert!(value.get("id").is_none());
        assert!(value.get("formattedPrice").is_none());
        assert_eq!(value["category"], 2);
    }

    #[test]
    fn test_price_encoding_shapes() {
        let amount = OrderPayload::new(&sample_food(), 1, &[], OrderPrice::Amount(21.5));
        let formatted = OrderPayload::new(
            &sample_food(),
            1,
            &[],
            OrderPrice::Formatted("R$ 21,50".to_string()),
        );

        assert_eq!(serde_json::to_value(&amount).unwrap()["price"], 21.5);
        assert_eq!(serde_json::to_value(&formatted).unwrap()["price"], "R$ 21,50");
    }

    #[test]
    fn test_item_fields_cannot_shadow_order_keys() {
        let json = r#"{
            "id": 1,
            "name": "Ao molho",
            "price": 19.9,
            "extras": [],
            "product_id": 99,
            "quantity": 5,
            "formattedPrice": "R$ 19,90",
            "category": 3
        }"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        let payload = OrderPayload::new(&food, 2, &[], OrderPrice::Amount(39.8));

        assert!(!payload.other.contains_key("product_id"));
        assert!(!payload.other.contains_key("quantity"));
        assert!(!payload.other.contains_key("formattedPrice"));
        assert_eq!(payload.other.get("category"), Some(&Value::from(3)));

        let body = serde_json::to_string(&payload).unwrap();
        assert_eq!(body.matches("\"product_id\"").count(), 1);
        assert_eq!(body.matches("\"quantity\"").count(), 1);

        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["product_id"], 1);
        assert_eq!(value["quantity"], 2);
    }
}
