use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub food_id: i64,
    pub quantity: f64,
    #[serde(default)]
    pub food: Option<Food>,
    #[serde(default)]
    pub calories: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub day: String,
    pub meal_type: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total_calories: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    #[serde(default)]
    pub total_calories: Option<f64>,
}

/// Unparseable numbers are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub food_id: Option<i64>,
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMeal {
    pub day: String,
    pub meal_type: String,
    pub items: Vec<NewItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub calories: String,
}

/// Body returned by `POST /meals/{id}/items`; servers answer with either
/// the updated meal or the created item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemAdded {
    Meal(Meal),
    Item(Item),
}

impl NewItem {
    /// Builds an item from raw form values. An empty quantity means one
    /// portion.
    pub fn from_form(food_id: &str, quantity: &str) -> Self {
        let quantity = quantity.trim();
        let quantity = if quantity.is_empty() { "1" } else { quantity };
        Self {
            food_id: food_id.trim().parse().ok(),
            quantity: quantity.parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meal_tolerates_missing_optional_fields() {
        let meal: Meal = serde_json::from_value(json!({
            "id": 4,
            "day": "2024-05-02",
            "meal_type": "lunch",
            "total_calories": null
        }))
        .unwrap();
        assert!(meal.items.is_empty());
        assert_eq!(meal.total_calories, None);
    }

    #[test]
    fn meal_with_wrong_shape_is_rejected() {
        let result: Result<Meal, _> = serde_json::from_value(json!({
            "id": "four",
            "day": "2024-05-02",
            "meal_type": "lunch"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn item_added_accepts_meal_or_item() {
        let meal: ItemAdded = serde_json::from_value(json!({
            "id": 1, "day": "2024-05-02", "meal_type": "dinner", "items": []
        }))
        .unwrap();
        assert!(matches!(meal, ItemAdded::Meal(_)));

        let item: ItemAdded =
            serde_json::from_value(json!({ "food_id": 3, "quantity": 2.5 })).unwrap();
        assert!(matches!(item, ItemAdded::Item(_)));
    }

    #[test]
    fn new_item_from_form_defaults_and_keeps_garbage_as_null() {
        let item = NewItem::from_form("7", "");
        assert_eq!(item.food_id, Some(7));
        assert_eq!(item.quantity, Some(1.0));

        let item = NewItem::from_form("", "lots");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "food_id": null, "quantity": null })
        );
    }
}
