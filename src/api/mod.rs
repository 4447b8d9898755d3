pub mod batch;
pub mod json_contract;
pub mod lookup;
pub mod request;
pub mod snapshot;
pub mod source;

pub use batch::{BatchResult, resample_all, resample_batch, resample_series};
pub use lookup::find_series_by_label;
pub use request::ResampleRequest;
pub use snapshot::{BatchSnapshot, SeriesSnapshot};
pub use source::{MemorySeries, SeriesSource};
