//! [`Dump`] for std, chrono and bitflags types.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::config::DumpOptions;
use crate::model::{type_name_of, Dump, Member, Scalar, Shape};

macro_rules! impl_scalar {
    ($variant:ident as $wide:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl Dump for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::$variant(*self as $wide))
                }
            }
        )+
    };
}

impl_scalar!(Int as i128 => i8, i16, i32, i64, i128, isize);
impl_scalar!(UInt as u128 => u8, u16, u32, u64, u128, usize);
impl_scalar!(F32 as f32 => f32);
impl_scalar!(F64 as f64 => f64);

impl Dump for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

impl Dump for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Unit)
    }
}

impl Dump for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Char(*self)
    }
}

impl Dump for str {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self))
    }
}

impl Dump for String {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self.as_str()))
    }
}

impl Dump for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self.as_ref()))
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Cow<str>")
    }
}

impl Dump for Path {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self.to_string_lossy())
    }
}

impl Dump for PathBuf {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self.to_string_lossy())
    }
}

impl Dump for Duration {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Duration(*self))
    }
}

impl Dump for SystemTime {
    fn shape(&self) -> Shape<'_> {
        let stamp: DateTime<Utc> = (*self).into();
        Shape::Scalar(Scalar::Timestamp(stamp.fixed_offset()))
    }
}

impl Dump for NaiveDate {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Date(*self))
    }
}

impl Dump for NaiveTime {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Time(*self))
    }
}

impl Dump for NaiveDateTime {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::DateTime(*self))
    }
}

impl<Tz: TimeZone> Dump for DateTime<Tz> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Timestamp(self.fixed_offset()))
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("DateTime")
    }
}

// Marker fields never show up in a dump.
impl<T: ?Sized> Dump for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite
    }

    fn is_excluded(&self) -> bool {
        true
    }
}

impl<T: Dump> Dump for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Null,
        }
    }

    fn type_name(&self) -> Cow<'static, str> {
        match self {
            Some(value) => value.type_name(),
            None => type_name_of::<T>(),
        }
    }

    fn members(&self) -> Vec<Member<'_>> {
        match self {
            Some(value) => value.members(),
            None => Vec::new(),
        }
    }

    fn custom_dump(&self, options: &DumpOptions) -> Option<String> {
        self.as_ref().and_then(|value| value.custom_dump(options))
    }

    fn is_excluded(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_excluded())
    }
}

macro_rules! impl_forward {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Dump + ?Sized> Dump for $ptr {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn type_name(&self) -> Cow<'static, str> {
                    (**self).type_name()
                }

                fn members(&self) -> Vec<Member<'_>> {
                    (**self).members()
                }

                fn custom_dump(&self, options: &DumpOptions) -> Option<String> {
                    (**self).custom_dump(options)
                }

                fn is_excluded(&self) -> bool {
                    (**self).is_excluded()
                }
            }
        )+
    };
}

impl_forward!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! impl_sequence {
    ($($seq:ident),+ $(,)?) => {
        $(
            impl<T: Dump> Dump for $seq<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Enumerable(self.iter().map(|item| item as &dyn Dump).collect())
                }
            }
        )+
    };
}

impl_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Dump, S> Dump for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Enumerable(self.iter().map(|item| item as &dyn Dump).collect())
    }
}

impl<T: Dump> Dump for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Enumerable(self.iter().map(|item| item as &dyn Dump).collect())
    }
}

impl<T: Dump, const N: usize> Dump for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Enumerable(self.iter().map(|item| item as &dyn Dump).collect())
    }
}

impl<K: Dump, V: Dump> Dump for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Dictionary(
            self.iter()
                .map(|(key, value)| (key as &dyn Dump, value as &dyn Dump))
                .collect(),
        )
    }
}

impl<K: Dump, V: Dump, S> Dump for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Dictionary(
            self.iter()
                .map(|(key, value)| (key as &dyn Dump, value as &dyn Dump))
                .collect(),
        )
    }
}

macro_rules! impl_tuple {
    ($(($($name:ident : $index:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: Dump),+> Dump for ($($name,)+) {
                fn shape(&self) -> Shape<'_> {
                    Shape::Composite
                }

                fn members(&self) -> Vec<Member<'_>> {
                    vec![$(Member::field(stringify!($index), &self.$index)),+]
                }
            }
        )+
    };
}

impl_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);

/// Implement [`Dump`] for `bitflags` types, rendering them as flags-style
/// enum values.
///
/// ```ignore
/// bitflags::bitflags! {
///     pub struct Access: u8 { const READ = 1; const WRITE = 2; }
/// }
/// valdump::dump_flags!(Access);
/// ```
#[macro_export]
macro_rules! dump_flags {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Dump for $ty {
                fn shape(&self) -> $crate::Shape<'_> {
                    let known: ::std::vec::Vec<(&str, u128)> =
                        <$ty as $crate::__private::bitflags::Flags>::FLAGS
                            .iter()
                            .map(|flag| (flag.name(), flag.value().bits() as u128))
                            .collect();
                    $crate::Shape::Enum($crate::EnumValue::flags(self.bits() as u128, &known))
                }
            }
        )+
    };
}
