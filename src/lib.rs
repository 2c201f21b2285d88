mod animator;
mod cache;
mod error;
mod helpers;
mod host;
mod in_app;
mod options;
mod parser;
mod types;
#[cfg(feature = "web")]
pub mod web;

pub use animator::Animator;
pub use cache::{get_agent_info, is_animation_supported, AgentCache};
pub use error::{Error, Result};
pub use host::{Element, Scheduler, Targets, UserAgentSource};
pub use options::AnimationOptions;
pub use parser::AgentParser;
pub use types::*;
