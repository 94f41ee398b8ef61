use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::assessment::ScoringError;
use crate::workflows::assistant::MatcherError;
use crate::workflows::facts::FactError;
use crate::workflows::training::TrainingError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Scoring(ScoringError),
    Matcher(MatcherError),
    Training(TrainingError),
    Facts(FactError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Scoring(ScoringError::InvalidConfiguration) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Training(err) => match err {
                TrainingError::UnknownQuestion(_) => StatusCode::NOT_FOUND,
                TrainingError::BlankReply => StatusCode::UNPROCESSABLE_ENTITY,
                TrainingError::AlreadyAnswered
                | TrainingError::NotAnswered
                | TrainingError::Finished => StatusCode::CONFLICT,
                TrainingError::EmptyBank => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Facts(err) => match err {
                FactError::EmptyContent => StatusCode::UNPROCESSABLE_ENTITY,
                FactError::NotFound(_) => StatusCode::NOT_FOUND,
                FactError::Timestamp(_) | FactError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Matcher(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::Matcher(err) => write!(f, "matcher error: {}", err),
            AppError::Training(err) => write!(f, "training error: {}", err),
            AppError::Facts(err) => write!(f, "fact error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Matcher(err) => Some(err),
            AppError::Training(err) => Some(err),
            AppError::Facts(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<MatcherError> for AppError {
    fn from(value: MatcherError) -> Self {
        Self::Matcher(value)
    }
}

impl From<TrainingError> for AppError {
    fn from(value: TrainingError) -> Self {
        Self::Training(value)
    }
}

impl From<FactError> for AppError {
    fn from(value: FactError) -> Self {
        Self::Facts(value)
    }
}
