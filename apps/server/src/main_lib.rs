use std::sync::Arc;

use reportinghub_core::merge::{MergeService, MergeServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub merge_service: Arc<dyn MergeServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("RH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state() -> Arc<AppState> {
    Arc::new(AppState {
        merge_service: Arc::new(MergeService::new()),
    })
}
