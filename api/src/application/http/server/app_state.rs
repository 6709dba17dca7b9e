use std::sync::Arc;

use ingredient_scanner_core::application::ScannerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ScannerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ScannerService) -> Self {
        Self { args, service }
    }
}
