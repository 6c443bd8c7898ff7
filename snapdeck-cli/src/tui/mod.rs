mod event;
mod handler;

pub use event::{AppEvent, EventHandler};
pub use handler::handle_key;
