/// What the host hands the gate when the document is ready.
#[derive(Debug, Clone, Default)]
pub struct HostEnvironment {
    /// The navigator's user-agent identifier, if the host exposes one.
    pub user_agent: Option<String>,
    /// Host exposes the legacy `ActiveXObject` scripting extension point.
    pub legacy_scripting_object: bool,
}

impl HostEnvironment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            legacy_scripting_object: false,
        }
    }

    pub fn with_legacy_scripting_object(mut self, present: bool) -> Self {
        self.legacy_scripting_object = present;
        self
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}
