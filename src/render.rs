use crate::models::{DailyTotal, Food, Meal};
use serde::Serialize;

pub const MISSING_FOOD: &str = "—";
pub const DEFAULT_QUANTITY: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalView {
    pub text: String,
}

impl Default for TotalView {
    fn default() -> Self {
        Self {
            text: kcal(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodOption {
    pub value: i64,
    pub label: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemLine {
    pub food_name: String,
    pub quantity: String,
    pub calories: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddItemForm {
    pub options: Vec<FoodOption>,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealCard {
    pub meal_id: i64,
    pub title: String,
    pub calories: String,
    pub items: Vec<ItemLine>,
    pub add_item: AddItemForm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealsView {
    pub empty_state_visible: bool,
    pub cards: Vec<MealCard>,
}

impl Default for MealsView {
    fn default() -> Self {
        Self {
            empty_state_visible: true,
            cards: Vec::new(),
        }
    }
}

pub fn render_total(total: &DailyTotal) -> TotalView {
    TotalView {
        text: kcal(total.total_calories),
    }
}

/// One card per meal, kept in the order the server returned them.
pub fn render_meals(meals: &[Meal], foods: &[Food]) -> MealsView {
    let options = food_options(foods);
    let cards = meals
        .iter()
        .map(|meal| MealCard {
            meal_id: meal.id,
            title: format!("{} — {}", meal.meal_type, meal.day),
            calories: format!("{} kcal", kcal(meal.total_calories)),
            items: meal
                .items
                .iter()
                .map(|item| ItemLine {
                    food_name: item
                        .food
                        .as_ref()
                        .map(|food| food.name.clone())
                        .unwrap_or_else(|| MISSING_FOOD.to_string()),
                    quantity: item.quantity.to_string(),
                    calories: kcal(item.calories),
                })
                .collect(),
            add_item: AddItemForm {
                options: options.clone(),
                quantity: DEFAULT_QUANTITY.to_string(),
            },
        })
        .collect::<Vec<_>>();

    MealsView {
        empty_state_visible: cards.is_empty(),
        cards,
    }
}

pub fn food_options(foods: &[Food]) -> Vec<FoodOption> {
    foods
        .iter()
        .map(|food| FoodOption {
            value: food.id,
            label: format!("{} ({}{})", food.name, food.amount, food.unit),
            hint: format!("× {}{}", food.amount, food.unit),
        })
        .collect()
}

fn kcal(value: Option<f64>) -> String {
    format!("{:.1}", value.unwrap_or(0.0))
}
