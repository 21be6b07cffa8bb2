use super::db::GateFile;
use super::error::{Error, Result};
use super::signatures::{default_signature_map, SignatureSet};
use super::types::*;
use rayon::prelude::*;
use std::path::Path;
use std::sync::OnceLock;

/// Where unsupported browsers are sent.
pub const DEFAULT_REDIRECT_PATH: &str = "/system/browsersTip";

static DEFAULT_GATE: OnceLock<BrowserGate> = OnceLock::new();

/// The shared gate built from the built-in signatures.
pub fn default_gate() -> &'static BrowserGate {
    DEFAULT_GATE.get_or_init(BrowserGate::new)
}

/// Gate `user_agent` with the built-in signatures.
///
/// `legacy_scripting_object` is the host's `ActiveXObject` capability; when
/// set the user agent is treated as IE whatever the string says.
pub fn evaluate(user_agent: Option<&str>, legacy_scripting_object: bool) -> Decision {
    default_gate().evaluate(user_agent, legacy_scripting_object)
}

#[derive(Debug)]
pub struct BrowserGate {
    signatures: SignatureSet,
    redirect_path: String,
}

impl BrowserGate {
    /// Gate with the built-in signatures and [`DEFAULT_REDIRECT_PATH`].
    pub fn new() -> Self {
        let signatures =
            SignatureSet::build(&default_signature_map()).expect("built-in signatures are valid");
        Self {
            signatures,
            redirect_path: DEFAULT_REDIRECT_PATH.to_string(),
        }
    }

    /// Load a gate configuration file.
    ///
    /// Families listed in the file replace the built-in clauses for that
    /// family; the rest keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file: GateFile = load_yaml(path.as_ref())?;
        Self::from_file(file)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if s.trim().is_empty() {
            return Self::from_file(GateFile::default());
        }
        let file: GateFile = serde_yaml::from_str(s)?;
        Self::from_file(file)
    }

    fn from_file(file: GateFile) -> Result<Self> {
        let redirect_path = match file.redirect_path {
            Some(path) if path.starts_with('/') => path,
            Some(path) => return Err(Error::InvalidRedirectPath(path)),
            None => DEFAULT_REDIRECT_PATH.to_string(),
        };

        let mut map = default_signature_map();
        for (family, clauses) in file.signatures {
            map.insert(family, clauses);
        }

        Ok(Self {
            signatures: SignatureSet::build(&map)?,
            redirect_path,
        })
    }

    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }

    /// Classify a user agent and decide whether to redirect.
    ///
    /// A missing user agent is treated as the empty string. IE signals win
    /// over every allowed family: a string carrying both `Trident` and
    /// `Chrome` is redirected.
    pub fn classify(&self, user_agent: Option<&str>, legacy_scripting_object: bool) -> Verdict {
        let ua = user_agent.unwrap_or("");
        let hits = self.signatures.scan(ua);

        let ie = self.signatures.matches(BrowserFamily::Ie, &hits);
        let chrome = self.signatures.matches(BrowserFamily::Chrome, &hits);
        let firefox = self.signatures.matches(BrowserFamily::Firefox, &hits);
        let safari = self.signatures.matches(BrowserFamily::Safari, &hits);

        // IE is checked first and short-circuits.
        let decision = if ie || legacy_scripting_object || !(chrome || firefox || safari) {
            Decision::Redirect
        } else {
            Decision::Allow
        };

        let verdict = Verdict {
            decision,
            ie,
            chrome,
            firefox,
            safari,
            capability_flag: legacy_scripting_object,
        };
        tracing::trace!(
            user_agent = ua,
            decision = %decision,
            ie,
            chrome,
            firefox,
            safari,
            capability_flag = legacy_scripting_object,
            "user agent classified"
        );
        verdict
    }

    pub fn evaluate(&self, user_agent: Option<&str>, legacy_scripting_object: bool) -> Decision {
        self.classify(user_agent, legacy_scripting_object).decision
    }

    pub fn classify_env(&self, env: &HostEnvironment) -> Verdict {
        self.classify(env.user_agent(), env.legacy_scripting_object)
    }

    pub fn evaluate_env(&self, env: &HostEnvironment) -> Decision {
        self.classify_env(env).decision
    }

    /// Gate many user agents (e.g. replayed from an access log) in parallel.
    ///
    /// Output order matches input order. No host capability is available for
    /// recorded strings, so the legacy scripting flag is taken as absent.
    pub fn evaluate_batch<S>(&self, user_agents: &[S]) -> Vec<Decision>
    where
        S: AsRef<str> + Sync,
    {
        user_agents
            .par_iter()
            .map(|ua| self.evaluate(Some(ua.as_ref()), false))
            .collect()
    }
}

impl Default for BrowserGate {
    fn default() -> Self {
        Self::new()
    }
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}
