use std::sync::Arc;

use sn_pipeline::NewsPipeline;

pub struct AppState {
    pub pipeline: Arc<NewsPipeline>,
}
