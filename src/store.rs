use async_trait::async_trait;

use crate::value::{Item, item_from_sdk};

pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Point-read capability of the backing store.
///
/// Implementations must perform a strongly-consistent read; an eventually-
/// consistent read can miss the write under test and make assertions flaky.
#[async_trait]
pub trait ItemStore {
    async fn read_item(&self, table_name: &str, key: &Item) -> Result<Option<Item>, StoreError>;
}

#[async_trait]
impl ItemStore for aws_sdk_dynamodb::Client {
    async fn read_item(&self, table_name: &str, key: &Item) -> Result<Option<Item>, StoreError> {
        let mut request = self
            .get_item()
            .table_name(table_name)
            .consistent_read(true);

        for (name, value) in key {
            let value = value
                .to_sdk()
                .ok_or_else(|| format!("key attribute '{name}' has no value"))?;
            request = request.key(name, value);
        }

        let response = request.send().await.map_err(StoreError::from)?;
        Ok(response.item().map(item_from_sdk))
    }
}
