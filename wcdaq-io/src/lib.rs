//! wcdaq-io: Event input and record output for wcdaq.
//!
//! Events come in as one JSON document per file; output records stream out
//! as JSON lines behind the [`RecordSink`] trait, which is the boundary the
//! rest of the pipeline hands records across.
//!

mod error;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use reader::{read_events, EventInput};
pub use writer::{JsonRecordWriter, RecordSink};
