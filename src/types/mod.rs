mod agent_info;
mod animation;
mod in_app;
mod os_info;

pub use agent_info::*;
pub use animation::*;
pub use in_app::*;
pub use os_info::*;
