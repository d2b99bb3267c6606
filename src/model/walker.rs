use tracing::debug;

use crate::config::DumpOptions;
use crate::error::AccessError;
use crate::model::{Dump, Member, MemberDescriptor, MemberKind, MemberValue, Visibility};

/// A member after its accessor has run.
pub struct ResolvedMember<'a> {
    pub descriptor: MemberDescriptor,
    pub value: Result<MemberValue<'a>, AccessError>,
}

/// Field names produced by code generation rather than written by hand.
pub fn is_generated_name(name: &str) -> bool {
    name.starts_with("__") || (name.starts_with('<') && name.ends_with("k__BackingField"))
}

/// Lists the members of a composite that a dump should show.
pub struct ReflectionWalker<'o> {
    options: &'o DumpOptions,
}

impl<'o> ReflectionWalker<'o> {
    pub fn new(options: &'o DumpOptions) -> Self {
        Self { options }
    }

    fn wants(&self, descriptor: &MemberDescriptor) -> bool {
        match (descriptor.kind, descriptor.visibility) {
            (MemberKind::Field, Visibility::Public) => self.options.dump_public_fields,
            (MemberKind::Field, Visibility::Private) => self.options.dump_private_fields,
            (MemberKind::Property, Visibility::Public) => self.options.dump_public_properties,
            (MemberKind::Property, Visibility::Private) => self.options.dump_private_properties,
        }
    }

    /// Selected members, fields before properties, each group in
    /// declaration order. Accessors are not run.
    pub fn members<'a>(&self, value: &'a dyn Dump) -> Vec<Member<'a>> {
        let (fields, properties): (Vec<_>, Vec<_>) = value
            .members()
            .into_iter()
            .filter(|member| !member.descriptor.excluded)
            .filter(|member| {
                member.descriptor.kind != MemberKind::Field
                    || !is_generated_name(&member.descriptor.name)
            })
            .filter(|member| self.wants(&member.descriptor))
            .partition(|member| member.descriptor.kind == MemberKind::Field);

        fields.into_iter().chain(properties).collect()
    }

    /// Run each selected accessor. Members whose value turns out to be of an
    /// excluded type are dropped; failures stay in the list as errors.
    pub fn resolve<'a>(&self, value: &'a dyn Dump) -> Vec<ResolvedMember<'a>> {
        self.members(value)
            .into_iter()
            .filter_map(|member| {
                let resolved = member.value();
                match &resolved {
                    Ok(inner) if inner.is_excluded() => return None,
                    Err(error) => {
                        debug!(member = %member.name(), %error, "member access failed");
                    }
                    Ok(_) => {}
                }
                Some(ResolvedMember {
                    descriptor: member.descriptor,
                    value: resolved,
                })
            })
            .collect()
    }
}
