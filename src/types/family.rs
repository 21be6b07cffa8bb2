use serde::Deserialize;

/// Browser family recognised by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserFamily {
    /// Internet Explorer, legacy Edge and anything carrying a Trident engine token.
    Ie,
    Chrome,
    Firefox,
    Safari,
}

impl BrowserFamily {
    /// All families, blocked family first.
    pub const ALL: [BrowserFamily; 4] = [Self::Ie, Self::Chrome, Self::Firefox, Self::Safari];

    /// Families whose match lets a user agent through (unless it is also IE).
    pub const ALLOWED: [BrowserFamily; 3] = [Self::Chrome, Self::Firefox, Self::Safari];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ie" | "msie" | "internet explorer" => Some(Self::Ie),
            "chrome" => Some(Self::Chrome),
            "firefox" => Some(Self::Firefox),
            "safari" => Some(Self::Safari),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ie => "ie",
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Ie)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Ie => 0,
            Self::Chrome => 1,
            Self::Firefox => 2,
            Self::Safari => 3,
        }
    }
}

impl std::fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
