use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const DATA_RETRIEVED: &str = "Data retrieved successfully!";
pub const SUCCESSFUL: &str = "Successful!";

/// Wrapper for API responses that renders the `{results, message}` envelope.
///
/// `results` is left out of the body entirely for message-only responses.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub results: Option<T>,
    pub message: String,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a payload, default 200 status
    pub fn results(results: T, message: impl Into<String>) -> Self {
        Self {
            results: Some(results),
            message: message.into(),
            status_code: None,
        }
    }

    /// Override the status code
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            results: None,
            message: message.into(),
            status_code: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn envelope(&self) -> Result<Value, serde_json::Error> {
        let mut body = Map::new();
        if let Some(results) = &self.results {
            body.insert("results".to_string(), serde_json::to_value(results)?);
        }
        body.insert("message".to_string(), Value::String(self.message.clone()));
        Ok(Value::Object(body))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        match self.envelope() {
            Ok(envelope) => (status, Json(envelope)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": true,
                        "message": "Failed to serialize response data",
                        "code": "INTERNAL_SERVER_ERROR"
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
