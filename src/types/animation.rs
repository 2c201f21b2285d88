use serde::Serialize;

/// Lifecycle of one animation attempt on one target.
///
/// `Ready` → `InProgress` → `Done` | `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnimationOutcome {
    #[serde(rename = "READY")]
    Ready,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "REJECT")]
    Rejected,
}

impl AnimationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Rejected => "REJECT",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Rejected)
    }
}
