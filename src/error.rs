use std::time::Duration;

use crate::types::AnimationOutcome;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The completion event of a target did not fire within the configured window.
    #[error("animation `{class_name}` did not complete within {timeout:?}")]
    AnimationTimeout {
        class_name: String,
        timeout: Duration,
    },
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
}

impl Error {
    /// Status carried by a failed animation attempt.
    ///
    /// Only [`Error::AnimationTimeout`] stems from an attempt; the other
    /// variants never reach an animation and report `None`.
    pub fn outcome(&self) -> Option<AnimationOutcome> {
        match self {
            Self::AnimationTimeout { .. } => Some(AnimationOutcome::Rejected),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
