pub mod model;
pub mod tui;
pub mod util;
