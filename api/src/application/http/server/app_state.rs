use std::sync::Arc;

use nutrimate_core::application::NutrimateService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrimateService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrimateService) -> Self {
        Self { args, service }
    }
}
