use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::{Credentials, Region};

/// Environment variable overriding the DynamoDB local endpoint.
pub const SERVICE_URL_ENV_VAR: &str = "DYNAMODB_LOCAL_SERVICE_URL";

const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Creates a client for DynamoDB local.
///
/// The service url is taken from `DYNAMODB_LOCAL_SERVICE_URL` if set,
/// otherwise `http://localhost:8000`. Credentials are hardcoded throwaways;
/// DynamoDB local does not validate them.
pub async fn new_client() -> aws_sdk_dynamodb::Client {
    let endpoint_url =
        std::env::var(SERVICE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
    new_client_with_endpoint(&endpoint_url).await
}

/// Creates a client for a DynamoDB local instance at a known endpoint, e.g.
/// a container port mapped by the test harness.
pub async fn new_client_with_endpoint(endpoint_url: &str) -> aws_sdk_dynamodb::Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "accessKey",
            "secretKey",
            None,
            None,
            "dynamodb-local",
        ))
        .endpoint_url(endpoint_url)
        .load()
        .await;
    aws_sdk_dynamodb::Client::new(&config)
}
