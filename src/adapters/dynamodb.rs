use crate::domain::model::VisitRecord;
use crate::domain::ports::VisitStore;
use crate::utils::error::{Result, VisitError};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, Select};
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

/// DynamoDB 表儲存區，屬性 `visit` 與 `timestamp` 皆為字串
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
    table: String,
}

impl DynamoStore {
    pub fn new(client: DynamoClient, table: String) -> Self {
        Self { client, table }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

pub fn record_to_item(record: &VisitRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("visit".to_string(), AttributeValue::S(record.visit.clone())),
        (
            "timestamp".to_string(),
            AttributeValue::S(record.timestamp.clone()),
        ),
    ])
}

impl VisitStore for DynamoStore {
    async fn put_record(&self, record: &VisitRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| {
                VisitError::store(format!(
                    "PutItem on {} failed: {}",
                    self.table,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }

    async fn count_records(&self) -> Result<usize> {
        let mut total = 0usize;
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // 一次 Scan 最多回傳 1MB，需跟著 LastEvaluatedKey 翻頁才是完整計數
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table)
                .select(Select::Count)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| {
                    VisitError::store(format!(
                        "Scan on {} failed: {}",
                        self.table,
                        DisplayErrorContext(&e)
                    ))
                })?;

            let page_count = usize::try_from(output.count()).map_err(|_| {
                VisitError::store(format!(
                    "Scan on {} returned a negative count: {}",
                    self.table,
                    output.count()
                ))
            })?;
            total += page_count;
            tracing::debug!(page_count = output.count(), total, "Scanned page");

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::scan::{ScanError, ScanOutput};
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    fn page_key(visit: &str) -> HashMap<String, AttributeValue> {
        HashMap::from([("visit".to_string(), AttributeValue::S(visit.to_string()))])
    }

    #[tokio::test]
    async fn test_count_follows_last_evaluated_key() {
        let first_page = mock!(DynamoClient::scan)
            .match_requests(|req| req.exclusive_start_key().is_none())
            .then_output(|| {
                ScanOutput::builder()
                    .count(2)
                    .set_last_evaluated_key(Some(page_key("2")))
                    .build()
            });
        let second_page = mock!(DynamoClient::scan)
            .match_requests(|req| {
                req.exclusive_start_key()
                    .and_then(|key| key.get("visit"))
                    == Some(&AttributeValue::S("2".to_string()))
            })
            .then_output(|| ScanOutput::builder().count(3).build());
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&first_page, &second_page]);

        let store = DynamoStore::new(client, "VisitDetails".to_string());

        assert_eq!(store.count_records().await.unwrap(), 5);
        assert_eq!(first_page.num_calls(), 1);
        assert_eq!(second_page.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_count_stops_on_empty_last_evaluated_key() {
        let only_page = mock!(DynamoClient::scan).then_output(|| {
            ScanOutput::builder()
                .count(4)
                .set_last_evaluated_key(Some(HashMap::new()))
                .build()
        });
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&only_page]);

        let store = DynamoStore::new(client, "VisitDetails".to_string());

        assert_eq!(store.count_records().await.unwrap(), 4);
        assert_eq!(only_page.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_negative_count_is_a_store_error() {
        let bad_page = mock!(DynamoClient::scan).then_output(|| ScanOutput::builder().count(-1).build());
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&bad_page]);

        let store = DynamoStore::new(client, "VisitDetails".to_string());

        let err = store.count_records().await.unwrap_err();
        assert!(matches!(err, VisitError::StoreError { .. }));
    }

    #[tokio::test]
    async fn test_scan_failure_is_a_store_error() {
        let missing_table = mock!(DynamoClient::scan).then_error(|| {
            ScanError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&missing_table]);

        let store = DynamoStore::new(client, "VisitDetails".to_string());

        let err = store.count_records().await.unwrap_err();
        assert!(matches!(err, VisitError::StoreError { ref message } if message.contains("VisitDetails")));
    }

    #[test]
    fn test_record_to_item_uses_string_attributes() {
        let record = VisitRecord {
            visit: "5".to_string(),
            timestamp: "05-Jan-24 03:22:10 PM".to_string(),
        };

        let item = record_to_item(&record);

        assert_eq!(item.len(), 2);
        assert_eq!(item.get("visit"), Some(&AttributeValue::S("5".to_string())));
        assert_eq!(
            item.get("timestamp"),
            Some(&AttributeValue::S("05-Jan-24 03:22:10 PM".to_string()))
        );
    }
}
