use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisitError {
    #[error("Missing required field in event: {field}")]
    MissingField { field: String },

    #[error("Record store error: {message}")]
    StoreError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl VisitError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingField { field } => format!("請求缺少必要欄位 '{}'", field),
            Self::StoreError { .. } => "無法存取訪問紀錄儲存區".to_string(),
            Self::SerializationError(_) => "JSON 格式錯誤".to_string(),
            Self::IoError(_) => "檔案讀寫失敗".to_string(),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => format!("配置錯誤: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "Send a JSON payload such as {\"add\": \"5\"}",
            Self::StoreError { .. } => "Check the table name, region and IAM permissions",
            Self::SerializationError(_) => "Check that the event or store file contains valid JSON",
            Self::IoError(_) => "Check that the store path exists and is writable",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Check the command line flags, the TOML file and the environment variables"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VisitError>;
