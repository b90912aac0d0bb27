//! # Detection Record I/O
//!
//! Loads text-detection records and writes review edits back into them.
//!
//! ## Philosophy
//!
//! - **Validate at the edge**: Malformed records are rejected here, so the
//!   editing core only ever sees well-formed fragments
//! - **Opaque metadata**: The first top-level entry is carried verbatim
//! - **In-memory output**: Edits mutate the loaded record; writing it anywhere
//!   is the caller's business
//!
//! ## Record Shape
//!
//! ```json
//! {
//!   "DocumentMetadata": { "Pages": 1 },
//!   "TextDetections": [
//!     {
//!       "DetectedText": "cat",
//!       "Geometry": {
//!         "BoundingBox": { "Left": 0.1, "Top": 0.2, "Width": 0.05, "Height": 0.02 }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Key names of the two top-level entries are not fixed; their order is.

pub mod error;
pub mod record;

pub use error::{RecordError, RecordResult};
pub use record::DetectionRecord;
