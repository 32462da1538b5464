//! Pattern engine - formatting and enumeration of local-parts

pub mod combinator;
pub mod formatter;
pub mod template;
pub mod validator;

pub use combinator::{combine, combine_with_mode, Combinator, SlotRange};
pub use formatter::format;
pub use template::parse_template;
pub use validator::{PatternValidator, RawPattern};
