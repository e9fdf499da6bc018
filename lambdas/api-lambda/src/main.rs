use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;
use students_shared::config::Config;
use students_shared::store::DynamoStore;
use students_shared::AppState;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();

    // Initialize the DynamoDB client once at startup
    let sdk_config = aws_config::load_from_env().await;
    let dynamo_client = match &config.dynamodb_endpoint {
        Some(endpoint) => {
            tracing::info!("Using DynamoDB endpoint override {}", endpoint);
            let dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config)
                .endpoint_url(endpoint)
                .build();
            DynamoClient::from_conf(dynamo_config)
        }
        None => DynamoClient::new(&sdk_config),
    };

    let store = DynamoStore::new(dynamo_client, config.table_name);
    tracing::info!("Serving student records from table {}", store.table_name());
    let state = AppState::new(store);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
