use crate::explanation::types::Prediction;
use serde_json::{json, Value};

/// JSON formatter for predictions
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format prediction envelope as pretty-printed JSON
    pub fn format(prediction: &Prediction) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::prediction_value(prediction))
    }

    /// `{overall, details_markdown, report}`; `report` is null for rejected input
    pub fn prediction_value(prediction: &Prediction) -> Value {
        json!({
            "overall": prediction.overall(),
            "details_markdown": prediction.details(),
            "report": prediction.report(),
        })
    }
}
