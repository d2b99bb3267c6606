//! # valdump
//!
//! Depth-bounded, human-readable text dumps of arbitrary values, for
//! diagnostic logging and test assertions.
//!
//! Values describe themselves through the [`Dump`] trait, usually derived:
//!
//! ```
//! use valdump::{dump, Dump};
//!
//! #[derive(Dump)]
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! let origin = Point { x: 0, y: 0 };
//! let text = dump!(origin);
//! assert!(text.contains("i32 x = 0"));
//! ```
//!
//! Output is plain text. Logging it is up to the caller; see [`sink`].

extern crate self as valdump;

pub mod config;
pub mod error;
pub mod model;
pub mod renderer;
pub mod sink;

#[cfg(test)]
mod tests;

pub use config::{Culture, DumpOptions};
pub use error::{AccessError, ConfigError};
pub use model::{
    classify, short_type_name, Dump, EnumValue, Member, MemberDescriptor, MemberKind,
    MemberValue, ReflectionWalker, Scalar, Shape, Tag, Visibility,
};
pub use renderer::{BoxRenderer, Dumper, LineBox};
pub use sink::{DumpSink, TracingSink, WriterSink};

#[cfg(feature = "derive")]
pub use valdump_derive::Dump;

/// Render `value` under `name`.
pub fn dump<T: Dump + ?Sized>(value: &T, options: &DumpOptions, name: &str) -> String {
    Dumper::new(options.clone()).dump(&value, name)
}

/// Render `value` under `name` inside a titled box.
pub fn dump_box<T: Dump + ?Sized>(value: &T, options: &DumpOptions, name: &str) -> String {
    Dumper::new(options.clone()).dump_box(&value, name)
}

/// Dump an expression, named after its own source text.
///
/// `dump!(order.lines)` labels the output `order.lines`.
#[macro_export]
macro_rules! dump {
    ($value:expr $(,)?) => {
        $crate::dump(&$value, &$crate::DumpOptions::default(), stringify!($value))
    };
    ($value:expr, $options:expr $(,)?) => {
        $crate::dump(&$value, &$options, stringify!($value))
    };
}

/// Boxed variant of [`dump!`].
#[macro_export]
macro_rules! dump_box {
    ($value:expr $(,)?) => {
        $crate::dump_box(&$value, &$crate::DumpOptions::default(), stringify!($value))
    };
    ($value:expr, $options:expr $(,)?) => {
        $crate::dump_box(&$value, &$options, stringify!($value))
    };
}

#[doc(hidden)]
pub mod __private {
    pub use bitflags;
}
