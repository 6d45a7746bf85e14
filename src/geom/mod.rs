pub mod edge_crossings;
pub mod error;
pub mod line;
pub mod options;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod ring;
pub mod segment;
pub mod segment_index;
mod series;
pub mod shape;

#[cfg(test)]
mod test_util;
