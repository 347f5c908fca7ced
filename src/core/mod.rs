pub mod read_count;
pub mod write_record;

pub use crate::domain::model::{ApiResponse, VisitRecord};
pub use crate::domain::ports::{Clock, Handler, VisitStore};
pub use crate::utils::error::Result;
