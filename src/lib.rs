mod db;
mod error;
mod gate;
mod navigate;
mod signatures;
mod types;

pub use error::{Error, Result};
pub use gate::{default_gate, evaluate, BrowserGate, DEFAULT_REDIRECT_PATH};
pub use navigate::{banner, on_load, Navigator, BANNER_HEAD, BANNER_TAIL};
pub use types::*;
