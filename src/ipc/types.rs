use serde::Deserialize;

use crate::model::Dataset;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// The dataset is the only state. Handlers read it; `dataset.load` swaps it.
pub struct AppState {
    pub data: Dataset,
}
