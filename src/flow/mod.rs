//! The serializable flow model: canvas snapshots, the conversion trait for
//! custom formats, and the API request shape sent to the remote service.

pub mod conversion;
pub mod request;
pub mod snapshot;

pub use conversion::*;
pub use request::*;
pub use snapshot::*;
