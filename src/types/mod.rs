//! Basic value types shared by every record

pub mod handle;
pub mod point;

pub use handle::{Handle, ObjectHandles};
pub use point::{Point2, Point3};
