use crate::utils::error::Result;
use crate::utils::validation::{validate_aws_region, validate_table_name, validate_url, Validate};
#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_dynamodb::config::Region;
#[cfg(feature = "lambda")]
use aws_sdk_dynamodb::Client as DynamoClient;
use std::env;

pub const DEFAULT_TABLE_NAME: &str = "VisitDetails";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub table_name: String,
    pub region: String,
    /// DynamoDB Local 之類的自訂端點
    pub endpoint_url: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            table_name: lookup("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: lookup("DYNAMODB_ENDPOINT").filter(|s| !s.trim().is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    /// 在冷啟動時建立一次，之後注入到 handler 重複使用
    #[cfg(feature = "lambda")]
    pub async fn dynamo_client(&self) -> DynamoClient {
        let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder =
            aws_sdk_dynamodb::config::Builder::from(&shared).region(Region::new(self.region.clone()));
        if let Some(endpoint) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }
        DynamoClient::from_conf(builder.build())
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_table_name("TABLE_NAME", &self.table_name)?;
        validate_aws_region("AWS_REGION", &self.region)?;
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("DYNAMODB_ENDPOINT", endpoint)?;
        }

        tracing::debug!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
