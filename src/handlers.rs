use crate::errors::AppError;
use crate::modal::MealFormInput;
use crate::models::NewFood;
use crate::state::AppState;
use crate::tracker::PageView;
use crate::ui::render_page;
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DateForm {
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(default)]
    pub food_id: String,
    #[serde(default)]
    pub quantity: String,
}

type Pairs = Form<Vec<(String, String)>>;

fn back() -> Redirect {
    Redirect::to("/")
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.tracker.take_view().await))
}

pub async fn get_state(State(state): State<AppState>) -> Json<PageView> {
    Json(state.tracker.view().await)
}

pub async fn change_date(State(state): State<AppState>, Form(form): Form<DateForm>) -> Redirect {
    state.tracker.change_date(&form.date).await;
    back()
}

pub async fn previous_day(State(state): State<AppState>) -> Redirect {
    state.tracker.previous_day().await;
    back()
}

pub async fn next_day(State(state): State<AppState>) -> Redirect {
    state.tracker.next_day().await;
    back()
}

pub async fn refresh_foods(State(state): State<AppState>) -> Redirect {
    state.tracker.refresh_foods().await;
    back()
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(meal_id): Path<i64>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, AppError> {
    state
        .tracker
        .add_item(meal_id, &form.food_id, &form.quantity)
        .await?;
    Ok(back())
}

pub async fn open_meal_modal(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.tracker.open_meal_modal().await?;
    Ok(back())
}

pub async fn close_meal_modal(State(state): State<AppState>) -> Redirect {
    state.tracker.close_meal_modal().await;
    back()
}

pub async fn add_meal_row(State(state): State<AppState>, Form(pairs): Pairs) -> Redirect {
    let input = MealFormInput::from_pairs(pairs);
    state.tracker.add_meal_row(&input).await;
    back()
}

pub async fn sync_meal_rows(State(state): State<AppState>, Form(pairs): Pairs) -> Redirect {
    let input = MealFormInput::from_pairs(pairs);
    state.tracker.sync_meal_rows(&input).await;
    back()
}

pub async fn remove_meal_row(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Form(pairs): Pairs,
) -> Redirect {
    let input = MealFormInput::from_pairs(pairs);
    state.tracker.remove_meal_row(&input, index).await;
    back()
}

pub async fn submit_meal(
    State(state): State<AppState>,
    Form(pairs): Pairs,
) -> Result<Redirect, AppError> {
    let input = MealFormInput::from_pairs(pairs);
    state.tracker.submit_meal(&input).await?;
    Ok(back())
}

pub async fn open_food_modal(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.tracker.open_food_modal().await?;
    Ok(back())
}

pub async fn close_food_modal(State(state): State<AppState>) -> Redirect {
    state.tracker.close_food_modal().await;
    back()
}

pub async fn submit_food(
    State(state): State<AppState>,
    Form(food): Form<NewFood>,
) -> Result<Redirect, AppError> {
    state.tracker.submit_food(&food).await?;
    Ok(back())
}
