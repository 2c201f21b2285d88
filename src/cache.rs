use std::sync::OnceLock;

use crate::host::UserAgentSource;
use crate::parser::AgentParser;
use crate::types::AgentInfo;

/// Write-once holder of a parsed [`AgentInfo`].
///
/// The first [`AgentCache::get_or_parse`] reads the source; every later call
/// returns the stored value, even if the source now reports something else.
pub struct AgentCache {
    info: OnceLock<AgentInfo>,
}

impl AgentCache {
    pub const fn new() -> Self {
        Self {
            info: OnceLock::new(),
        }
    }

    pub fn get_or_parse<S>(&self, source: &S) -> &AgentInfo
    where
        S: UserAgentSource + ?Sized,
    {
        self.info.get_or_init(|| {
            let ua = source.user_agent();
            match AgentParser::new() {
                Ok(parser) => parser.parse(&ua),
                Err(err) => {
                    tracing::error!(%err, "failed to build user agent parser, using defaults");
                    AgentInfo::default()
                }
            }
        })
    }

    /// The cached value, if it was already filled.
    pub fn get(&self) -> Option<&AgentInfo> {
        self.info.get()
    }
}

impl Default for AgentCache {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS_AGENT: AgentCache = AgentCache::new();

/// Agent info of the hosting environment, parsed on first use and kept for
/// the lifetime of the process.
pub fn get_agent_info<S>(source: &S) -> &'static AgentInfo
where
    S: UserAgentSource + ?Sized,
{
    PROCESS_AGENT.get_or_parse(source)
}

/// Whether the hosting device can run CSS animations at all.
pub fn is_animation_supported<S>(source: &S) -> bool
where
    S: UserAgentSource + ?Sized,
{
    get_agent_info(source).is_animation_supported()
}
