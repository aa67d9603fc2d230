pub mod handlers;
pub mod server;
pub mod session;

pub use server::{routes, AppContext, ServerConfig, ServerError, WebServer};
pub use session::{SessionError, SharedSession};
