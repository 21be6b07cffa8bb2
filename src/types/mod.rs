mod decision;
mod environment;
mod family;

pub use decision::*;
pub use environment::*;
pub use family::*;
