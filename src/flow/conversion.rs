use super::snapshot::FlowSnapshot;
use crate::error::SnapshotConversionError;

/// A trait for custom editor or export formats that can be converted into
/// the canonical [`FlowSnapshot`].
///
/// Several near-identical canvas variants existed historically, each with
/// its own element shape. Implementing this trait on your own structs is
/// the translation layer that lets all of them share one state model and
/// one submission path.
///
/// # Example
///
/// ```rust,no_run
/// use renketsu::prelude::*;
/// use renketsu::error::SnapshotConversionError;
///
/// // 1. Define structs matching your own canvas export.
/// struct MyElement { id: String, label: String }
/// struct MyCanvas { elements: Vec<MyElement> }
///
/// // 2. Implement `IntoSnapshot` for the top-level struct.
/// impl IntoSnapshot for MyCanvas {
///     fn into_snapshot(self) -> Result<FlowSnapshot, SnapshotConversionError> {
///         let mut snapshot = FlowSnapshot::default();
///         for element in self.elements {
///             // Your logic to map elements onto SnapshotNode / SnapshotEdge.
/// #           let _ = element;
///         }
///         Ok(snapshot)
///     }
/// }
/// ```
pub trait IntoSnapshot {
    /// Consumes the object and converts it into the canonical snapshot.
    fn into_snapshot(self) -> Result<FlowSnapshot, SnapshotConversionError>;
}

impl IntoSnapshot for FlowSnapshot {
    fn into_snapshot(self) -> Result<FlowSnapshot, SnapshotConversionError> {
        Ok(self)
    }
}
