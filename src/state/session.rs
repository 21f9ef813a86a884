use crate::geometry::Point;
use crate::host::ProxyId;

/// One in-progress drag, alive from touch-begin to touch-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Index of the dragged item in the config's item list.
    pub index: usize,
    pub proxy: ProxyId,
    /// Stage-local position of the proxy's centre.
    pub position: Point,
}
