pub mod backends;
pub mod cli;
pub mod color;
pub mod logging;
pub mod metric;
pub mod pipeline;
pub mod preview;
pub mod space;
pub mod theme;
pub mod tui;
