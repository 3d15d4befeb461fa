//! Values of the `X-HelpBubble-Status` response header.

/// Header present on every gateway response.
pub const HELPBUBBLE_STATUS_HEADER: &str = "x-helpbubble-status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpBubbleStatus {
    /// The reader produced the answer.
    Answered,
    /// A canned answer was served.
    Fallback,
    /// Service up with a reader loaded.
    Healthy,
    /// Service up without a reader; `/ask` serves canned answers.
    FallbackOnly,
    Ok,
}

impl HelpBubbleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::Fallback => "fallback",
            Self::Healthy => "healthy",
            Self::FallbackOnly => "fallback_only",
            Self::Ok => "ok",
        }
    }
}

impl std::fmt::Display for HelpBubbleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
