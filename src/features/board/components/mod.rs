pub mod add_order_modal;
pub mod column;
pub mod edit_order_modal;
pub mod header;
pub mod help_modal;
pub mod order_card;

pub use add_order_modal::AddOrderModal;
pub use column::BoardColumn;
pub use edit_order_modal::EditOrderModal;
pub use header::BoardHeader;
pub use help_modal::HelpModal;
pub use order_card::OrderCard;
