use browser_gate::{
    on_load, BrowserFamily, BrowserGate, Decision, Error, HostEnvironment, DEFAULT_REDIRECT_PATH,
};
use fixtures::fixtures;
use serde::Deserialize;
use std::sync::OnceLock;

static GATE_INSTANCE: OnceLock<BrowserGate> = OnceLock::new();

fn shared_gate() -> &'static BrowserGate {
    GATE_INSTANCE.get_or_init(BrowserGate::new)
}

// ---------------------------------------------------------------------------
// User-agent fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GateFixture {
    user_agent: String,
    #[serde(default)]
    legacy_scripting_object: bool,
    decision: String,
    #[serde(default)]
    families: Vec<BrowserFamily>,
}

fn load_fixtures(path: &std::path::Path) -> Vec<GateFixture> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_user_agent_fixtures(path: &std::path::Path) {
    let gate = shared_gate();

    for f in &load_fixtures(path) {
        let verdict = gate.classify(Some(f.user_agent.as_str()), f.legacy_scripting_object);
        assert_eq!(
            verdict.decision.as_str(),
            f.decision,
            "decision mismatch for UA: {:?}",
            f.user_agent
        );
        assert_eq!(
            verdict.families(),
            f.families,
            "family mismatch for UA: {:?}",
            f.user_agent
        );
    }
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_on_load_follows_fixtures(path: &std::path::Path) {
    let gate = shared_gate();

    for f in &load_fixtures(path) {
        let env = HostEnvironment::new(f.user_agent.clone())
            .with_legacy_scripting_object(f.legacy_scripting_object);
        let mut visited: Vec<String> = Vec::new();
        let decision = on_load(gate, &env, &mut |p: &str| visited.push(p.to_string()));

        assert_eq!(decision.as_str(), f.decision, "UA: {:?}", f.user_agent);
        match decision {
            Decision::Redirect => assert_eq!(visited, vec![DEFAULT_REDIRECT_PATH.to_string()]),
            Decision::Allow => assert!(visited.is_empty(), "UA: {:?}", f.user_agent),
        }
    }
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_batch_matches_single(path: &std::path::Path) {
    let gate = shared_gate();
    let fixtures: Vec<GateFixture> = load_fixtures(path)
        .into_iter()
        .filter(|f| !f.legacy_scripting_object)
        .collect();
    let uas: Vec<&str> = fixtures.iter().map(|f| f.user_agent.as_str()).collect();

    let batch = gate.evaluate_batch(&uas);
    assert_eq!(batch.len(), uas.len());
    for (ua, decision) in uas.iter().zip(batch) {
        assert_eq!(gate.evaluate(Some(*ua), false), decision, "UA: {:?}", ua);
    }
}

// ---------------------------------------------------------------------------
// Config files
// ---------------------------------------------------------------------------

#[test]
fn test_strict_config() {
    let gate = BrowserGate::from_path("tests/configs/strict.yml").unwrap();
    assert_eq!(gate.redirect_path(), "/system/browsersTip/strict");

    let cases = [
        ("Mozilla/5.0 (iPhone; CPU iPhone OS 14_0) AppleWebKit/605.1.15 Version/14.0 Safari/605.1.15", Decision::Allow),
        ("Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/29.0 Mobile/15E148 Safari/605.1.15", Decision::Redirect),
        ("Safari/605.1.15", Decision::Redirect),
        ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0 Safari/537.36", Decision::Allow),
        ("Mozilla/5.0 (X11; Linux x86_64; rv:88.0) Gecko/20100101 Firefox/88.0", Decision::Allow),
        ("Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko", Decision::Redirect),
    ];
    for (ua, expected) in cases {
        assert_eq!(gate.evaluate(Some(ua), false), expected, "UA: {:?}", ua);
    }

    let env = HostEnvironment::new("curl/7.64.1");
    let mut visited: Vec<String> = Vec::new();
    on_load(&gate, &env, &mut |p: &str| visited.push(p.to_string()));
    assert_eq!(visited, vec!["/system/browsersTip/strict".to_string()]);
}

#[test]
fn test_bad_clause_config() {
    let err = BrowserGate::from_path("tests/configs/bad_clause.yml").err();
    assert!(
        matches!(
            err,
            Some(Error::EmptyClause {
                family: BrowserFamily::Ie
            })
        ),
        "got {:?}",
        err
    );
}
