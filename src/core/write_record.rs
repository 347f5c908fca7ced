use crate::core::{ApiResponse, Clock, Handler, Result, VisitStore};
use crate::domain::model::{VisitRecord, VisitTimestamp};
use crate::utils::error::VisitError;
use async_trait::async_trait;
use serde_json::Value;

pub const ADD_FIELD: &str = "add";

/// 新增訪問紀錄: 從事件取出 `add`，加上目前時間後寫入儲存區
pub struct WriteVisitRecord<S: VisitStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: VisitStore, C: Clock> WriteVisitRecord<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub async fn run(&self, event: &Value) -> Result<ApiResponse> {
        let value = extract_add(event)?;
        let now = VisitTimestamp::new(self.clock.now());

        let record = VisitRecord::new(value_as_text(value), &now);
        self.store.put_record(&record).await?;
        tracing::info!(visit = %record.visit, timestamp = %record.timestamp, "Appended visit record");

        ApiResponse::json(200, &record)
    }
}

#[async_trait]
impl<S: VisitStore, C: Clock> Handler for WriteVisitRecord<S, C> {
    async fn handle(&self, event: Value) -> Result<ApiResponse> {
        tracing::debug!("WriteVisitRecord event: {}", event);
        self.run(&event).await
    }
}

/// 先找事件頂層的 `add`，找不到時再找代理整合的 `body` 字串
pub fn extract_add(event: &Value) -> Result<Value> {
    if let Some(value) = event.get(ADD_FIELD) {
        return Ok(value.clone());
    }

    if let Some(Value::String(body)) = event.get("body") {
        let payload: Value = serde_json::from_str(body)?;
        if let Some(value) = payload.get(ADD_FIELD) {
            return Ok(value.clone());
        }
    }

    Err(VisitError::MissingField {
        field: ADD_FIELD.to_string(),
    })
}

/// Strings are stored as-is, anything else as its compact JSON text
/// (`true`, `null`, `{"a":1}`), not a Python-style repr (`True`, `None`, `{'a': 1}`).
pub fn value_as_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
