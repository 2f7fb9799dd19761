//! Errors

use tracing::error;

use shopcart_app::domain::carts::{CartsServiceError, data::ValidationError};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match &error {
        CartsServiceError::CartNotFound(_)
        | CartsServiceError::OwnerNotFound(_)
        | CartsServiceError::ItemNotFound { .. }
        | CartsServiceError::ProductNameNotFound(_) => ApiError::not_found(error.to_string()),
        CartsServiceError::AlreadyExists(_)
        | CartsServiceError::InvalidOwner(_)
        | CartsServiceError::Validation(_) => ApiError::bad_request(error.to_string()),
        CartsServiceError::Store(source) => {
            error!(error = ?source, "cart store failure");

            ApiError::internal()
        }
    }
}

pub(crate) fn invalid_payload(error: ValidationError) -> ApiError {
    into_api_error(CartsServiceError::Validation(error))
}
