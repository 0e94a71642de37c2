mod diagnostics;
pub use diagnostics::*;
