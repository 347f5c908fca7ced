use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// 時間戳格式，例如 `05-Jan-24 03:22:10 PM`
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%y %I:%M:%S %p";

/// A single visit entry. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub visit: String,
    pub timestamp: String,
}

impl VisitRecord {
    pub fn new(visit: impl Into<String>, timestamp: &VisitTimestamp) -> Self {
        Self {
            visit: visit.into(),
            timestamp: timestamp.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitTimestamp(NaiveDateTime);

impl VisitTimestamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl fmt::Display for VisitTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// 訪問次數。空集合時序列化為數字 `0`，否則序列化為字串 (例如 `"3"`)。
/// 呼叫端依賴這個不一致的型別，不要統一。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitsCount {
    Empty,
    Counted(usize),
}

impl VisitsCount {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Counted(count)
        }
    }

    pub fn value(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Counted(n) => *n,
        }
    }
}

impl Serialize for VisitsCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_u64(0),
            Self::Counted(n) => serializer.serialize_str(&n.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitCountBody {
    pub name: String,
    pub visits_count: VisitsCount,
    pub recent_visit_time: String,
}

/// Gateway-style response envelope: `statusCode`, `headers` and a JSON text `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> crate::utils::error::Result<Self> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Ok(Self {
            status_code,
            headers,
            body: serde_json::to_string(body)?,
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn body_json(&self) -> crate::utils::error::Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
