use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin system of a monitored feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    Discord,
    Elfa,
}

impl Platform {
    /// Every platform accepted by the `sources.platform` check constraint.
    pub const ALL: [Platform; 3] = [Platform::Telegram, Platform::Discord, Platform::Elfa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::Discord => "discord",
            Platform::Elfa => "elfa",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown platform: {}", self.0)
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Endpoint name of an Elfa channel id, e.g.
/// `/trending-narratives?timeFrame=day` → `trending-narratives`.
///
/// The channel id itself is stored verbatim; this only reads it.
pub fn elfa_endpoint(channel_id: &str) -> Option<&str> {
    let path = channel_id.split('?').next().unwrap_or(channel_id);
    let name = path.trim_matches('/');
    (!name.is_empty()).then_some(name)
}
