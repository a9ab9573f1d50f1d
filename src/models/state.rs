use std::sync::Arc;

use crate::domain::types::PageSize;
use crate::source::DataSource;

/// Data sources and list settings handed to every handler.
#[derive(Clone)]
pub struct AdminState {
    pub users: Arc<dyn DataSource>,
    pub reservations: Arc<dyn DataSource>,
    pub page_size: PageSize,
}

impl AdminState {
    pub fn new(
        users: Arc<dyn DataSource>,
        reservations: Arc<dyn DataSource>,
        page_size: PageSize,
    ) -> Self {
        Self {
            users,
            reservations,
            page_size,
        }
    }
}
