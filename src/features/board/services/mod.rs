pub mod board_operations;
pub mod drag;
pub mod overlay;
pub mod presentation;

pub use board_operations::OrderBoard;
pub use drag::{AreaMarker, AREA_ATTRIBUTE};
pub use overlay::Overlay;
pub use presentation::{BoardLayout, Presentation};
