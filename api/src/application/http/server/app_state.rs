use std::sync::Arc;

use mealbook_core::application::MealbookService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealbookService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealbookService) -> Self {
        Self { args, service }
    }
}
