pub mod command;
pub mod command_handler;
pub mod context;
pub mod error;
pub mod gen_user_event;

pub use gen_user_event::{GenUserEvent, GenUserEventHandler};
