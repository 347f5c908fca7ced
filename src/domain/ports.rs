use crate::domain::model::{ApiResponse, VisitRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// 訪問紀錄儲存區: 只支援新增與計數
pub trait VisitStore: Send + Sync {
    fn put_record(
        &self,
        record: &VisitRecord,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Number of records in the whole collection, in one scan pass.
    fn count_records(&self) -> impl std::future::Future<Output = Result<usize>> + Send;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, event: serde_json::Value) -> Result<ApiResponse>;
}
