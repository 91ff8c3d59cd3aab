pub mod components;
pub mod dom;
pub mod hooks;
pub mod services;

pub use components::*;
pub use hooks::*;
