use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/day", post(handlers::change_date))
        .route("/day/prev", post(handlers::previous_day))
        .route("/day/next", post(handlers::next_day))
        .route("/foods/refresh", post(handlers::refresh_foods))
        .route("/meals/:id/items", post(handlers::add_item))
        .route("/meal-modal/open", post(handlers::open_meal_modal))
        .route("/meal-modal/close", post(handlers::close_meal_modal))
        .route("/meal-modal/rows/add", post(handlers::add_meal_row))
        .route("/meal-modal/rows/sync", post(handlers::sync_meal_rows))
        .route("/meal-modal/rows/:index/remove", post(handlers::remove_meal_row))
        .route("/meal-modal/submit", post(handlers::submit_meal))
        .route("/food-modal/open", post(handlers::open_food_modal))
        .route("/food-modal/close", post(handlers::close_food_modal))
        .route("/food-modal/submit", post(handlers::submit_food))
        .with_state(state)
}
