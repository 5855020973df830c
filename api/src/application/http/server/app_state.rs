use std::{sync::Arc, time::Instant};

use menuforge_core::application::MenuforgeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenuforgeService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenuforgeService) -> Self {
        Self {
            args,
            service,
            started_at: Instant::now(),
        }
    }
}
