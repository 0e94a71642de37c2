mod error;
pub use error::{ModelError, ModelResult};

mod matrix;
pub use matrix::Matrix;

mod tag;
pub use tag::{Binding, BoundArg, Tag, TagSlot, TagSpec};

mod value;
pub use value::{LogValue, format_general};
