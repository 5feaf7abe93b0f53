use crate::api::{ApiError, CalorieApi};
use crate::cache::FoodCache;
use crate::dates;
use crate::modal::{FoodModal, MealFormInput, MealModal};
use crate::models::{Food, NewFood, NewItem, NewMeal};
use crate::navigator::DayNavigator;
use crate::notice::{Notice, Notices};
use crate::render::{MealsView, TotalView, render_meals, render_total};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
#[error("changes are blocked until a day loads successfully")]
pub struct Blocked;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    /// A later load was requested while this one was in flight.
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayView {
    pub total: TotalView,
    pub meals: MealsView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub current_date: String,
    pub date_input: String,
    pub total: TotalView,
    pub meals: MealsView,
    pub meal_modal: MealModal,
    pub food_modal: FoodModal,
    pub notices: Vec<Notice>,
    pub blocked: bool,
}

struct TrackerState {
    navigator: DayNavigator,
    foods: FoodCache,
    meal_modal: MealModal,
    food_modal: FoodModal,
    day: DayView,
    notices: Notices,
}

impl TrackerState {
    fn page(&self, notices: Vec<Notice>) -> PageView {
        PageView {
            current_date: self.navigator.current().to_string(),
            date_input: self.navigator.date_input().to_string(),
            total: self.day.total.clone(),
            meals: self.day.meals.clone(),
            meal_modal: self.meal_modal.clone(),
            food_modal: self.food_modal.clone(),
            notices,
            blocked: self.notices.is_blocked(),
        }
    }

    fn ensure_unblocked(&self, action: &str) -> Result<(), Blocked> {
        if self.notices.is_blocked() {
            warn!("refusing to {action} while blocked");
            return Err(Blocked);
        }
        Ok(())
    }
}

pub struct Tracker {
    api: Arc<dyn CalorieApi>,
    state: Mutex<TrackerState>,
}

impl Tracker {
    pub fn new(api: Arc<dyn CalorieApi>) -> Self {
        Self {
            api,
            state: Mutex::new(TrackerState {
                navigator: DayNavigator::new(dates::today()),
                foods: FoodCache::default(),
                meal_modal: MealModal::default(),
                food_modal: FoodModal::default(),
                day: DayView::default(),
                notices: Notices::default(),
            }),
        }
    }

    async fn state(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().await
    }

    /// The initial load of today. A failure here is fatal: it is logged and
    /// blocks changes until some later day load succeeds.
    pub async fn bootstrap(&self) {
        let today = dates::today_string();
        if let Err(err) = self.load_day(&today).await {
            error!("initial load of {today} failed: {err}");
            self.state()
                .await
                .notices
                .push(Notice::fatal(format!("Could not load {today}: {err}")));
        }
    }

    pub async fn view(&self) -> PageView {
        let state = self.state().await;
        state.page(state.notices.visible())
    }

    /// Like [`Tracker::view`], but one-shot notices are consumed.
    pub async fn take_view(&self) -> PageView {
        let mut state = self.state().await;
        let notices = state.notices.take();
        state.page(notices)
    }

    pub async fn current_date(&self) -> String {
        self.state().await.navigator.current().to_string()
    }

    pub async fn load_foods(&self, force: bool) -> Result<Vec<Food>, ApiError> {
        {
            let state = self.state().await;
            if !state.foods.needs_fetch(force) {
                return Ok(state.foods.foods().to_vec());
            }
        }

        let foods = self.api.list_foods().await?;
        debug!("loaded {} foods", foods.len());
        self.state().await.foods.replace(foods.clone());
        Ok(foods)
    }

    pub async fn load_day(&self, day: &str) -> Result<LoadOutcome, ApiError> {
        let token = self.state().await.navigator.begin(day);

        let fetched = match self.load_foods(false).await {
            Ok(_) => tokio::try_join!(self.api.meals_for(day), self.api.total_for(day)),
            Err(err) => Err(err),
        };

        let mut state = self.state().await;
        if !state.navigator.is_latest(token) {
            debug!("dropping stale load of {day}");
            return Ok(LoadOutcome::Superseded);
        }
        let (meals, total) = fetched?;
        let meals = render_meals(&meals, state.foods.foods());
        state.day = DayView {
            total: render_total(&total),
            meals,
        };
        state.notices.clear_fatal();
        Ok(LoadOutcome::Rendered)
    }

    async fn reload(&self) {
        let day = self.current_date().await;
        if let Err(err) = self.load_day(&day).await {
            self.report(format!("failed to reload {day}"), err).await;
        }
    }

    async fn report(&self, context: String, err: ApiError) {
        error!("{context}: {err}");
        self.state()
            .await
            .notices
            .push(Notice::recoverable(format!("{context}: {err}")));
    }

    /// A date-input edit; an empty field means today.
    pub async fn change_date(&self, value: &str) {
        let day = dates::requested_day(value, dates::today());
        if let Err(err) = self.load_day(&day).await {
            self.report(format!("failed to load {day}"), err).await;
        }
    }

    pub async fn previous_day(&self) {
        let day = self.state().await.navigator.previous(dates::today());
        self.change_date(&day).await;
    }

    pub async fn next_day(&self) {
        let day = self.state().await.navigator.next(dates::today());
        self.change_date(&day).await;
    }

    pub async fn refresh_foods(&self) {
        match self.load_foods(true).await {
            Ok(_) => self.reload().await,
            Err(err) => self.report("failed to refresh foods".into(), err).await,
        }
    }

    pub async fn add_item(&self, meal_id: i64, food_id: &str, quantity: &str) -> Result<(), Blocked> {
        self.state().await.ensure_unblocked("add an item")?;

        let item = NewItem::from_form(food_id, quantity);
        match self.api.add_item(meal_id, &item).await {
            Ok(_) => self.reload().await,
            Err(err) => {
                self.report(format!("failed to add item to meal {meal_id}"), err)
                    .await
            }
        }
        Ok(())
    }

    pub async fn open_meal_modal(&self) -> Result<(), Blocked> {
        let mut state = self.state().await;
        state.ensure_unblocked("open the meal dialog")?;
        let TrackerState {
            foods, meal_modal, ..
        } = &mut *state;
        meal_modal.open(foods.foods());
        Ok(())
    }

    pub async fn close_meal_modal(&self) {
        self.state().await.meal_modal.close();
    }

    pub async fn sync_meal_rows(&self, input: &MealFormInput) {
        self.state().await.meal_modal.sync(input);
    }

    pub async fn add_meal_row(&self, input: &MealFormInput) {
        let mut state = self.state().await;
        let TrackerState {
            foods, meal_modal, ..
        } = &mut *state;
        meal_modal.sync(input);
        meal_modal.add_row(foods.foods());
    }

    pub async fn remove_meal_row(&self, input: &MealFormInput, index: usize) {
        let mut state = self.state().await;
        state.meal_modal.sync(input);
        state.meal_modal.remove_row(index);
    }

    /// Creates a meal for the current day from the dialog rows. The dialog
    /// closes before the request goes out and stays closed if it fails.
    pub async fn submit_meal(&self, input: &MealFormInput) -> Result<(), Blocked> {
        let meal = {
            let mut state = self.state().await;
            state.ensure_unblocked("create a meal")?;
            state.meal_modal.sync(input);
            state.meal_modal.close();
            NewMeal {
                day: state.navigator.current().to_string(),
                meal_type: state.meal_modal.meal_type.clone(),
                items: state.meal_modal.collect(),
            }
        };

        match self.api.create_meal(&meal).await {
            Ok(created) => {
                info!("created meal {} for {}", created.id, meal.day);
                self.reload().await;
            }
            Err(err) => self.report("failed to create meal".into(), err).await,
        }
        Ok(())
    }

    pub async fn open_food_modal(&self) -> Result<(), Blocked> {
        let mut state = self.state().await;
        state.ensure_unblocked("open the food dialog")?;
        state.food_modal.open();
        Ok(())
    }

    pub async fn close_food_modal(&self) {
        self.state().await.food_modal.close();
    }

    /// Posts the raw food fields. Neither the food cache nor the day is
    /// reloaded afterwards.
    pub async fn submit_food(&self, food: &NewFood) -> Result<(), Blocked> {
        self.state().await.ensure_unblocked("create a food")?;

        match self.api.create_food(food).await {
            Ok(created) => {
                info!("created food {} ({})", created.id, created.name);
                self.state().await.food_modal.close();
            }
            Err(err) => self.report("failed to create food".into(), err).await,
        }
        Ok(())
    }
}
