//! Reading side of SVG handling: the path data model, its parser and writer,
//! and a light document walk that pulls out what an icon template needs.

mod error;
mod parse;
mod types;
mod write;

pub use error::ParseError;
pub use parse::{parse_data, parse_view_box, read_outline};
pub use types::{Arc, Command, Data, Outline, Point, Position, ViewBox};
pub use write::format_number;
