//! Value objects - Immutable objects defined by their attributes

mod category;
mod data_record;

pub use category::Category;
pub use data_record::{DataRecord, DataRecordError};
