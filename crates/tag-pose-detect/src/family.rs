//! Closed registry of supported tag families.

use std::fmt;
use std::str::FromStr;

/// A family name outside the supported registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported tag family: {0}")]
pub struct UnknownFamilyError(pub String);

/// Supported tag families.
///
/// The set is closed: a family is resolved once at startup, and an unknown
/// name is a construction error rather than a runtime fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagFamily {
    Tag16h5,
    Tag25h9,
    Tag36h10,
    Tag36h11,
    TagCircle21h7,
    TagCircle49h12,
    TagCustom48h12,
    TagStandard41h12,
    TagStandard52h13,
}

impl TagFamily {
    /// All supported families.
    pub const ALL: [TagFamily; 9] = [
        TagFamily::Tag16h5,
        TagFamily::Tag25h9,
        TagFamily::Tag36h10,
        TagFamily::Tag36h11,
        TagFamily::TagCircle21h7,
        TagFamily::TagCircle49h12,
        TagFamily::TagCustom48h12,
        TagFamily::TagStandard41h12,
        TagFamily::TagStandard52h13,
    ];

    /// Registry key, as used in startup configuration and synthesized frame
    /// names.
    pub fn name(&self) -> &'static str {
        match self {
            TagFamily::Tag16h5 => "16h5",
            TagFamily::Tag25h9 => "25h9",
            TagFamily::Tag36h10 => "36h10",
            TagFamily::Tag36h11 => "36h11",
            TagFamily::TagCircle21h7 => "Circle21h7",
            TagFamily::TagCircle49h12 => "Circle49h12",
            TagFamily::TagCustom48h12 => "Custom48h12",
            TagFamily::TagStandard41h12 => "Standard41h12",
            TagFamily::TagStandard52h13 => "Standard52h13",
        }
    }
}

impl fmt::Display for TagFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagFamily {
    type Err = UnknownFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| UnknownFamilyError(s.to_string()))
    }
}
