pub mod board;

pub use board::OrderBoardPage;
