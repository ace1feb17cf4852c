pub mod error;
pub mod math;
pub mod offset;

pub use error::{OffsetError, Result};
pub use offset::{offset_polyline, JoinStyle, PolylineOffset2D};
