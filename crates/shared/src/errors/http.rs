use crate::errors::{
    analytics::AnalyticsError, errors::ErrorResponse, repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl AppErrorHttp {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            ServiceError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation failed: {}", errors.join("; ")),
            ),

            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            ServiceError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ServiceError::Analytics(analytics_err) => match analytics_err {
                AnalyticsError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AnalyticsError::NoData => (StatusCode::NOT_FOUND, analytics_err.to_string()),
            },

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                RepositoryError::ForeignKey(msg) => (
                    StatusCode::BAD_REQUEST,
                    format!("Foreign key violation: {msg}"),
                ),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
            },

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!("🚨 {}", self.0);
        } else {
            warn!("⚠️ {}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        AppErrorHttp::from(err).status_and_message().0
    }

    #[test]
    fn maps_lookup_failures_to_not_found() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::NotFound("Seller 4 not found".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::Analytics(AnalyticsError::NoData)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn maps_bad_input_to_bad_request() {
        assert_eq!(
            status_of(ServiceError::Validation(vec!["name: required".into()])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::Analytics(AnalyticsError::InvalidArgument(
                "days must be positive, got 0".into()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::ForeignKey(
                "fk_transaction_seller".into()
            ))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn maps_conflicts_to_conflict() {
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::Conflict(
                "duplicate key value violates unique constraint".into()
            ))),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn hides_database_details() {
        let (status, message) =
            AppErrorHttp::from(ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolClosed)))
                .status_and_message();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Database error");
    }
}
