pub mod use_board;

pub use use_board::{expect_board, use_board};
