//! Elementary geometric primitives consumed by the bounding volumes and the queries.

pub use self::plane::{Line, Plane};
pub use self::segment::Segment;
pub use self::triangle::Triangle;

mod plane;
mod segment;
mod triangle;
