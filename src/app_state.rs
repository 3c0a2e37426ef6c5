use std::sync::Arc;

use crate::api::responder::Responder;
use crate::config::AppConfig;
use crate::domain::item::service::ItemService;

#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub item_service: Arc<ItemService>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    AppState {
        responder: Arc::new(Responder::new(config)),
        item_service: Arc::new(ItemService::with_sample_data()),
    }
}
