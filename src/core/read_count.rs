use crate::core::{ApiResponse, Clock, Handler, Result, VisitStore};
use crate::domain::model::{VisitCountBody, VisitTimestamp, VisitsCount};
use async_trait::async_trait;

pub const READ_RESPONSE_NAME: &str = "GET Request";

/// 讀取訪問次數: 計算集合中的紀錄數並回傳目前時間
pub struct ReadVisitCount<S: VisitStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: VisitStore, C: Clock> ReadVisitCount<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub async fn run(&self) -> Result<ApiResponse> {
        let now = VisitTimestamp::new(self.clock.now());

        // 單次掃描，計數與是否為空都由同一個結果判斷
        let count = self.store.count_records().await?;
        tracing::info!(visits = count, "Counted visit records");

        let body = VisitCountBody {
            name: READ_RESPONSE_NAME.to_string(),
            visits_count: VisitsCount::from_count(count),
            recent_visit_time: now.to_string(),
        };

        Ok(ApiResponse::json(200, &body)?.with_header("Access-Control-Allow-Origin", "*"))
    }
}

#[async_trait]
impl<S: VisitStore, C: Clock> Handler for ReadVisitCount<S, C> {
    async fn handle(&self, event: serde_json::Value) -> Result<ApiResponse> {
        tracing::debug!("ReadVisitCount event: {}", event);
        self.run().await
    }
}
