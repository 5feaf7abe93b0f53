use crate::models::Food;

/// Session-wide food list. Refilled wholesale; never patched per item.
#[derive(Debug, Default)]
pub struct FoodCache {
    foods: Vec<Food>,
}

impl FoodCache {
    pub fn needs_fetch(&self, force: bool) -> bool {
        force || self.foods.is_empty()
    }

    pub fn replace(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: i64) -> Food {
        Food {
            id,
            name: format!("food {id}"),
            amount: 100.0,
            unit: "g".into(),
            calories: 50.0,
        }
    }

    #[test]
    fn empty_cache_always_needs_fetch() {
        let cache = FoodCache::default();
        assert!(cache.needs_fetch(false));
        assert!(cache.needs_fetch(true));
    }

    #[test]
    fn filled_cache_only_refetches_when_forced() {
        let mut cache = FoodCache::default();
        cache.replace(vec![food(1), food(2)]);
        assert!(!cache.needs_fetch(false));
        assert!(cache.needs_fetch(true));
        assert_eq!(cache.foods().len(), 2);

        cache.replace(vec![food(3)]);
        assert_eq!(cache.foods(), &[food(3)]);
    }
}
