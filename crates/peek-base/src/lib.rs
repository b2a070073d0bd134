pub mod logging;
pub mod rect;
pub mod sequence;
pub mod vec2;

pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use rect::Rect;
pub use sequence::{Sequence, Stamped};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use peek_base::log::*
pub use log;
