use super::BrowserFamily;

/// Outcome of gating a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect,
}

impl Decision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Redirect => "redirect",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`Decision`] together with the predicate results that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    /// `true` when the IE string signals matched.
    pub ie: bool,
    pub chrome: bool,
    pub firefox: bool,
    pub safari: bool,
    /// `true` when the host reported the legacy scripting object.
    pub capability_flag: bool,
}

impl Verdict {
    /// Whether the user agent counts as IE, by string or by host capability.
    pub fn is_ie(&self) -> bool {
        self.ie || self.capability_flag
    }

    pub fn is_allowed_family(&self) -> bool {
        self.chrome || self.firefox || self.safari
    }

    pub fn matches(&self, family: BrowserFamily) -> bool {
        match family {
            BrowserFamily::Ie => self.is_ie(),
            BrowserFamily::Chrome => self.chrome,
            BrowserFamily::Firefox => self.firefox,
            BrowserFamily::Safari => self.safari,
        }
    }

    /// Families matched by the user agent string, blocked family first.
    pub fn families(&self) -> Vec<BrowserFamily> {
        BrowserFamily::ALL
            .into_iter()
            .filter(|f| self.matches(*f))
            .collect()
    }
}
