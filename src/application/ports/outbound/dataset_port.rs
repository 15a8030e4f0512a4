//! Dataset port - lookup of Star Wars entities by category and id

use async_trait::async_trait;

use crate::domain::value_objects::{Category, DataRecord};

/// Port for the public Star Wars dataset
#[async_trait]
pub trait DatasetPort: Send + Sync {
    type Error: std::fmt::Display + Send + Sync;

    /// Fetch one record, e.g. `people/1`
    async fn fetch_record(&self, category: Category, id: u32) -> Result<DataRecord, Self::Error>;
}
