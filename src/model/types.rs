use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::Dump;

/// The category a value falls into. Decides how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    SimpleScalar,
    String,
    Char,
    Enum,
    Dictionary,
    Enumerable,
    Composite,
}

impl Tag {
    /// Terminal tags render from the value itself and never recurse.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Tag::Dictionary | Tag::Enumerable | Tag::Composite)
    }
}

/// A scalar value, kept typed until a culture formats it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Unit,
    Bool(bool),
    Int(i128),
    UInt(u128),
    F32(f32),
    F64(f64),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<FixedOffset>),
    Duration(Duration),
}

/// The symbolic side of an enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: Cow<'static, str>,
    pub code: i128,
    pub flags: bool,
}

impl EnumValue {
    pub fn new(name: impl Into<Cow<'static, str>>, code: i128) -> Self {
        Self {
            name: name.into(),
            code,
            flags: false,
        }
    }

    /// Build a flags-style value from raw bits and the named flags of its type.
    ///
    /// An exact name match wins. Otherwise the bits are covered greedily by
    /// the largest named flags; if some bits stay uncovered the value is not
    /// decomposable and the numeric code doubles as the name.
    pub fn flags(bits: u128, known: &[(&str, u128)]) -> Self {
        let code = bits as i128;
        let name = decompose_flags(bits, known).unwrap_or_else(|| bits.to_string());
        Self {
            name: Cow::Owned(name),
            code,
            flags: true,
        }
    }
}

fn decompose_flags(bits: u128, known: &[(&str, u128)]) -> Option<String> {
    if let Some((name, _)) = known.iter().find(|(_, value)| *value == bits) {
        return Some(name.to_string());
    }
    if bits == 0 {
        return None;
    }

    let mut candidates: Vec<&(&str, u128)> = known.iter().filter(|(_, value)| *value != 0).collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let mut remaining = bits;
    let mut picked: Vec<&(&str, u128)> = Vec::new();
    for candidate in candidates {
        if candidate.1 & remaining == candidate.1 {
            remaining &= !candidate.1;
            picked.push(candidate);
        }
        if remaining == 0 {
            break;
        }
    }

    if remaining != 0 {
        return None;
    }

    picked.sort_by_key(|(_, value)| *value);
    Some(
        picked
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(" | "),
    )
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)?;
        if self.flags {
            f.write_str(" (Flags)")?;
        }
        Ok(())
    }
}

/// What a value looks like to the renderer.
///
/// Containers hand out borrowed views of their children so the renderer can
/// count them before walking them.
pub enum Shape<'a> {
    Null,
    Scalar(Scalar),
    String(Cow<'a, str>),
    Char(char),
    Enum(EnumValue),
    Dictionary(Vec<(&'a dyn Dump, &'a dyn Dump)>),
    Enumerable(Vec<&'a dyn Dump>),
    Composite,
}

impl Shape<'_> {
    pub fn tag(&self) -> Tag {
        match self {
            Shape::Null => Tag::Null,
            Shape::Scalar(_) => Tag::SimpleScalar,
            Shape::String(_) => Tag::String,
            Shape::Char(_) => Tag::Char,
            Shape::Enum(_) => Tag::Enum,
            Shape::Dictionary(_) => Tag::Dictionary,
            Shape::Enumerable(_) => Tag::Enumerable,
            Shape::Composite => Tag::Composite,
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Null => f.write_str("Null"),
            Shape::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Shape::String(text) => f.debug_tuple("String").field(text).finish(),
            Shape::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Shape::Enum(value) => f.debug_tuple("Enum").field(value).finish(),
            Shape::Dictionary(entries) => write!(f, "Dictionary({} entries)", entries.len()),
            Shape::Enumerable(items) => write!(f, "Enumerable({} items)", items.len()),
            Shape::Composite => f.write_str("Composite"),
        }
    }
}

/// Classify a value without rendering it.
pub fn classify(value: &dyn Dump) -> Tag {
    value.shape().tag()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// Metadata for one member of a composite, rebuilt on every dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: Cow<'static, str>,
    pub declared_type: Cow<'static, str>,
    pub kind: MemberKind,
    pub visibility: Visibility,
    pub read_only: bool,
    pub excluded: bool,
}

/// Strip module paths from a `std::any::type_name` string, generics included.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' | '*' => {
                out.push(c);
                segment_start = out.len();
            }
            _ => out.push(c),
        }
    }

    out
}

pub fn type_name_of<T: ?Sized>() -> Cow<'static, str> {
    Cow::Owned(short_type_name(std::any::type_name::<T>()))
}
