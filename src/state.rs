use crate::api::CalorieApi;
use crate::tracker::Tracker;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,
}

impl AppState {
    pub fn new(api: Arc<dyn CalorieApi>) -> Self {
        Self {
            tracker: Arc::new(Tracker::new(api)),
        }
    }
}
