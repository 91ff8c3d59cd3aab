pub mod column;
pub mod order;

pub use column::Column;
pub use order::{Order, OrderFields, OrderId};
