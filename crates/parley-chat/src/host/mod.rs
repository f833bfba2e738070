//! Session registry and event handlers.

mod chat_host;
mod settings;


pub use chat_host::ChatHost;
pub use settings::HostSettings;
