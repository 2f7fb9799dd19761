//! Request body helpers.

use salvo::{http::ParseError, prelude::Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use shopcart_app::domain::carts::data::ValidationError;

/// Decode JSON cart payloads into domain validation errors.
pub(crate) trait RequestExt {
    /// Shape and type errors come back as [`ValidationError::Malformed`] so
    /// the caller decides when to report them.
    async fn json_or_malformed<T: DeserializeOwned + Send>(
        &mut self,
    ) -> Result<T, ValidationError>;
}

impl RequestExt for Request {
    async fn json_or_malformed<T: DeserializeOwned + Send>(
        &mut self,
    ) -> Result<T, ValidationError> {
        self.parse_json::<T>().await.map_err(|error| {
            debug!("rejected request body: {error}");

            ValidationError::Malformed(malformed_reason(&error))
        })
    }
}

fn malformed_reason(error: &ParseError) -> String {
    match error {
        ParseError::SerdeJson(source) => source.to_string(),
        _ => "request body is not a JSON document".to_string(),
    }
}
