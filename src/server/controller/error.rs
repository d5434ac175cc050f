use actix_web::{error, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::database::DbError;
use crate::server::model::validation::ValidationError;
use crate::server::service::submission::SubmitError;

#[derive(Debug, Display, Error)]
pub(crate) enum ApiError {
    #[display("server is busy, please retry")]
    ServerIsBusy,
    #[display("{source}")]
    BadRequest { source: ValidationError },
    #[display("database error, please retry")]
    DbError,
}

impl From<ValidationError> for ApiError {
    fn from(source: ValidationError) -> Self {
        ApiError::BadRequest { source }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::PoolExhausted { .. } => ApiError::ServerIsBusy,
            _ => ApiError::DbError,
        }
    }
}

impl From<SubmitError> for ApiError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Validation { source } => source.into(),
            SubmitError::Storage { source } => source.into(),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::ServerIsBusy => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::DbError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
