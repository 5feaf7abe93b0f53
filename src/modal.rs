use crate::models::{Food, NewItem};
use crate::render::{DEFAULT_QUANTITY, FoodOption, food_options};
use serde::Serialize;
use std::collections::BTreeMap;

pub const MEAL_TYPES: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn aria_hidden(self) -> &'static str {
        match self {
            Visibility::Hidden => "true",
            Visibility::Visible => "false",
        }
    }
}

/// One editable row of the meal dialog. The options are captured when the
/// row is created, like a select filled once at creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRowDraft {
    pub options: Vec<FoodOption>,
    pub selected: Option<i64>,
    pub quantity: String,
    pub unit_hint: String,
}

impl ItemRowDraft {
    pub fn blank(foods: &[Food]) -> Self {
        let options = food_options(foods);
        let selected = options.first().map(|option| option.value);
        let mut row = Self {
            options,
            selected,
            quantity: DEFAULT_QUANTITY.to_string(),
            unit_hint: String::new(),
        };
        row.refresh_hint();
        row
    }

    pub fn select(&mut self, food_id: Option<i64>) {
        self.selected = food_id;
        self.refresh_hint();
    }

    fn refresh_hint(&mut self) {
        self.unit_hint = self
            .selected
            .and_then(|id| self.options.iter().find(|option| option.value == id))
            .map(|option| option.hint.clone())
            .unwrap_or_default();
    }

    fn to_item(&self) -> NewItem {
        let food_id = self.selected.map(|id| id.to_string()).unwrap_or_default();
        NewItem::from_form(&food_id, &self.quantity)
    }
}

/// Row values posted back by the meal form (`food_id_{i}`, `quantity_{i}`).
#[derive(Debug, Default, PartialEq)]
pub struct MealFormInput {
    pub meal_type: Option<String>,
    pub rows: BTreeMap<usize, RowInput>,
}

#[derive(Debug, Default, PartialEq)]
pub struct RowInput {
    pub food_id: Option<String>,
    pub quantity: Option<String>,
}

impl MealFormInput {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut input = Self::default();
        for (key, value) in pairs {
            if key == "meal_type" {
                input.meal_type = Some(value);
            } else if let Some(index) = row_index(&key, "food_id_") {
                input.rows.entry(index).or_default().food_id = Some(value);
            } else if let Some(index) = row_index(&key, "quantity_") {
                input.rows.entry(index).or_default().quantity = Some(value);
            }
        }
        input
    }
}

fn row_index(key: &str, prefix: &str) -> Option<usize> {
    key.strip_prefix(prefix)?.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealModal {
    pub visibility: Visibility,
    pub meal_type: String,
    pub rows: Vec<ItemRowDraft>,
}

impl Default for MealModal {
    fn default() -> Self {
        Self {
            visibility: Visibility::Hidden,
            meal_type: MEAL_TYPES[0].to_string(),
            rows: Vec::new(),
        }
    }
}

impl MealModal {
    pub fn open(&mut self, foods: &[Food]) {
        self.rows = vec![ItemRowDraft::blank(foods)];
        self.visibility = Visibility::Visible;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    pub fn add_row(&mut self, foods: &[Food]) {
        self.rows.push(ItemRowDraft::blank(foods));
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Applies what the user currently has in the form to the drafts.
    pub fn sync(&mut self, input: &MealFormInput) {
        if let Some(meal_type) = &input.meal_type {
            self.meal_type = meal_type.clone();
        }
        for (index, row) in self.rows.iter_mut().enumerate() {
            let Some(posted) = input.rows.get(&index) else {
                continue;
            };
            if let Some(food_id) = &posted.food_id {
                row.select(food_id.trim().parse().ok());
            }
            if let Some(quantity) = &posted.quantity {
                row.quantity = quantity.clone();
            }
        }
    }

    pub fn collect(&self) -> Vec<NewItem> {
        self.rows.iter().map(ItemRowDraft::to_item).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodModal {
    pub visibility: Visibility,
}

impl FoodModal {
    pub fn open(&mut self) {
        self.visibility = Visibility::Visible;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
    }
}
