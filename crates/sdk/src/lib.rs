mod gmail;
mod util;

pub use gmail::*;
pub use util::*;
