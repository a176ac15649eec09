use std::sync::Arc;

use crate::configuration::FulfillmentSettings;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub fulfillment: Arc<FulfillmentSettings>,
}

impl AppState {
    pub fn new(fulfillment: FulfillmentSettings) -> Self {
        Self {
            fulfillment: Arc::new(fulfillment),
        }
    }
}
