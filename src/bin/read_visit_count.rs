use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use visit_counter::utils::logger;
use visit_counter::{ApiResponse, DynamoStore, LambdaConfig, LocalClock, ReadVisitCount};

async fn function_handler(
    handler: &ReadVisitCount<DynamoStore, LocalClock>,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "ReadVisitCount invoked");

    // 儲存區錯誤直接往上拋，由 Lambda runtime 回報為呼叫失敗
    let response = handler.run().await?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    let store = DynamoStore::new(config.dynamo_client().await, config.table_name.clone());
    tracing::info!(table = %store.table(), region = %config.region, "Starting ReadVisitCount");
    let handler = ReadVisitCount::new(store, LocalClock);

    run(service_fn(|event: LambdaEvent<Value>| function_handler(&handler, event))).await
}
