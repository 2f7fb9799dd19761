//! Service metadata and liveness handlers.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "Shopcart REST API Service";

/// Service Info Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceInfoResponse {
    /// Service name
    pub name: String,

    /// Service version
    pub version: String,

    /// Cart collection path
    pub url: String,

    /// Interactive API documentation path
    pub docs: String,
}

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Service Info Handler
#[endpoint(tags("service"), summary = "Describe the service")]
pub(crate) async fn index() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        url: "/carts".to_string(),
        docs: "/docs".to_string(),
    })
}

/// Healthcheck handler
#[endpoint(tags("service"), summary = "Health check endpoint")]
pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    fn service() -> Service {
        Service::new(
            Router::new()
                .get(index)
                .push(Router::with_path("healthcheck").get(healthcheck)),
        )
    }

    #[tokio::test]
    async fn index_describes_service() -> TestResult {
        let response: ServiceInfoResponse = TestClient::get("http://example.com/")
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.name, SERVICE_NAME);
        assert_eq!(response.url, "/carts");
        assert_eq!(response.docs, "/docs");

        Ok(())
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() -> TestResult {
        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");

        Ok(())
    }
}
