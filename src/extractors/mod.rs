mod record_id;

pub use record_id::{parse_leading_int, RecordId};
