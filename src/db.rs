use indexmap::IndexMap;
use serde::Deserialize;

use super::types::BrowserFamily;

// ---------------------------------------------------------------------------
// Gate configuration file
//
// redirect_path: /system/browsersTip
// signatures:
//   ie: [[compatible, MSIE], [Edge], [Trident]]
//   chrome: [[Chrome], [WebKit]]
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GateFile {
    #[serde(default)]
    pub redirect_path: Option<String>,
    #[serde(default)]
    pub signatures: SignatureMap,
}

/// One clause is a list of substrings that must all be present.
pub(crate) type Clause = Vec<String>;

/// Family → clauses, OR'd together. IndexMap keeps file order for diagnostics.
pub(crate) type SignatureMap = IndexMap<BrowserFamily, Vec<Clause>>;
