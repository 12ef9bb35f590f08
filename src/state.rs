use std::sync::Arc;

use crate::config::Config;
use crate::sheets::RowAppender;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sheets: Arc<dyn RowAppender>,
}
