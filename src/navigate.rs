use super::gate::BrowserGate;
use super::types::{Decision, HostEnvironment};

pub const BANNER_HEAD: &str =
    "*************************** browser version ***************************";
pub const BANNER_TAIL: &str =
    "******************************** END **********************************";

/// The host's page navigation mechanism.
///
/// A navigation replaces the current document; whether the host honours it
/// is outside the gate's control, so nothing is returned.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, path: &str) {
        self(path)
    }
}

/// Raw user agent framed by the two banner lines.
pub fn banner(user_agent: &str) -> String {
    format!("{BANNER_HEAD}\n {user_agent} \n{BANNER_TAIL}")
}

/// Document-ready handler: log the user agent, gate it, and navigate to the
/// gate's redirect path when the browser is unsupported.
///
/// Running it again for the same environment yields the same decision.
pub fn on_load<N>(gate: &BrowserGate, env: &HostEnvironment, navigator: &mut N) -> Decision
where
    N: Navigator + ?Sized,
{
    let ua = env.user_agent().unwrap_or("");
    tracing::info!(user_agent = ua, "{}", banner(ua));

    let verdict = gate.classify_env(env);
    tracing::debug!(
        decision = %verdict.decision,
        families = ?verdict.families(),
        "browser gate verdict"
    );

    if verdict.decision.is_redirect() {
        navigator.navigate(gate.redirect_path());
    }
    verdict.decision
}
