pub mod error;
pub mod format;
pub mod picture;
pub mod temporal;

pub use error::{ERR_NS, Error, ErrorCode, ExpandedName};
pub use format::format_time;
pub use picture::{Letter, Marker, NameCase, Picture, PictureItem, Presentation, Width, WidthBound};
pub use temporal::TimeValue;
