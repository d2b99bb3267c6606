use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use crate::config::DumpOptions;
use crate::error::AccessError;
use crate::model::types::*;

/// A value that can describe itself to the dump engine.
///
/// Only [`shape`](Dump::shape) is required. Composites also list their
/// members; everything else has a sensible default.
pub trait Dump {
    fn shape(&self) -> Shape<'_>;

    /// Name shown in front of the value, module paths stripped.
    fn type_name(&self) -> Cow<'static, str> {
        type_name_of::<Self>()
    }

    /// Fields and properties of a composite, fields first.
    fn members(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// Replace member-by-member rendering with a fixed fragment.
    fn custom_dump(&self, _options: &DumpOptions) -> Option<String> {
        None
    }

    /// `true` when the type carries the exclusion marker.
    fn is_excluded(&self) -> bool {
        false
    }
}

/// A member's value, either borrowed from the owner or computed on access.
pub enum MemberValue<'a> {
    Borrowed(&'a dyn Dump),
    Owned(Box<dyn Dump + 'a>),
}

impl<'a> Deref for MemberValue<'a> {
    type Target = dyn Dump + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            MemberValue::Borrowed(value) => *value,
            MemberValue::Owned(value) => value.as_ref(),
        }
    }
}

type Getter<'a> = Box<dyn Fn() -> Result<MemberValue<'a>, AccessError> + 'a>;

enum Accessor<'a> {
    Borrowed(&'a dyn Dump),
    Computed(Getter<'a>),
    Skipped,
}

/// One field or property of a composite, with a deferred accessor.
pub struct Member<'a> {
    pub descriptor: MemberDescriptor,
    accessor: Accessor<'a>,
}

impl<'a> Member<'a> {
    pub fn field<T: Dump + 'a>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
        Self {
            descriptor: MemberDescriptor {
                name: name.into(),
                declared_type: type_name_of::<T>(),
                kind: MemberKind::Field,
                visibility: Visibility::Public,
                read_only: false,
                excluded: false,
            },
            accessor: Accessor::Borrowed(value),
        }
    }

    pub fn property<T, F>(name: impl Into<Cow<'static, str>>, getter: F) -> Self
    where
        T: Dump + 'a,
        F: Fn() -> T + 'a,
    {
        Self::computed::<T>(
            name.into(),
            Box::new(move || Ok::<_, AccessError>(MemberValue::Owned(Box::new(getter())))),
        )
    }

    /// A property whose getter can fail; the error text is shown in place
    /// of the value.
    pub fn try_property<T, E, F>(name: impl Into<Cow<'static, str>>, getter: F) -> Self
    where
        T: Dump + 'a,
        E: fmt::Display,
        F: Fn() -> Result<T, E> + 'a,
    {
        Self::computed::<T>(
            name.into(),
            Box::new(move || match getter() {
                Ok(value) => Ok(MemberValue::Owned(Box::new(value))),
                Err(error) => Err(AccessError::from_display(error)),
            }),
        )
    }

    /// A member that carries the exclusion marker. Its type does not need to
    /// implement [`Dump`] because it is never read.
    pub fn skipped(
        name: impl Into<Cow<'static, str>>,
        declared_type: impl Into<Cow<'static, str>>,
        kind: MemberKind,
    ) -> Self {
        Self {
            descriptor: MemberDescriptor {
                name: name.into(),
                declared_type: declared_type.into(),
                kind,
                visibility: Visibility::Public,
                read_only: kind == MemberKind::Property,
                excluded: true,
            },
            accessor: Accessor::Skipped,
        }
    }

    fn computed<T: ?Sized>(name: Cow<'static, str>, getter: Getter<'a>) -> Self {
        Self {
            descriptor: MemberDescriptor {
                name,
                declared_type: type_name_of::<T>(),
                kind: MemberKind::Property,
                visibility: Visibility::Public,
                read_only: true,
                excluded: false,
            },
            accessor: Accessor::Computed(getter),
        }
    }

    pub fn private(mut self) -> Self {
        self.descriptor.visibility = Visibility::Private;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.descriptor.excluded = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Run the accessor.
    pub fn value(&self) -> Result<MemberValue<'a>, AccessError> {
        match &self.accessor {
            Accessor::Borrowed(value) => Ok(MemberValue::Borrowed(*value)),
            Accessor::Computed(getter) => getter(),
            Accessor::Skipped => Err(AccessError::new("member is excluded from dumps")),
        }
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
