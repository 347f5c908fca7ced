use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use visit_counter::utils::logger;
use visit_counter::{ApiResponse, DynamoStore, LambdaConfig, LocalClock, WriteVisitRecord};

async fn function_handler(
    handler: &WriteVisitRecord<DynamoStore, LocalClock>,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "WriteVisitRecord invoked");

    // 缺少 `add` 或寫入失敗都不回傳錯誤內容，直接讓呼叫失敗
    let response = handler.run(&event.payload).await?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    let store = DynamoStore::new(config.dynamo_client().await, config.table_name.clone());
    tracing::info!(table = %store.table(), region = %config.region, "Starting WriteVisitRecord");
    let handler = WriteVisitRecord::new(store, LocalClock);

    run(service_fn(|event: LambdaEvent<Value>| function_handler(&handler, event))).await
}
