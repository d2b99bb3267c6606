use tracing::trace;

use crate::model::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

/// A value paired with the name it is shown under.
pub struct NamedValue<'v> {
    pub value: &'v dyn Dump,
    pub name: &'v str,
}

impl<'v> NamedValue<'v> {
    pub fn new(value: &'v dyn Dump, name: &'v str) -> Self {
        Self { value, name }
    }
}

impl Render for NamedValue<'_> {
    fn render(&self, context: &RenderContext<'_>) -> String {
        let shape = self.value.shape();
        let prefix = context
            .palette
            .prefix(&self.value.type_name(), self.name);

        match terminal_literal(&shape, context) {
            Some(literal) => format!("{} = {}", prefix, literal),
            None => render_container(self.value, shape, &prefix, context),
        }
    }
}

impl Render for ResolvedMember<'_> {
    fn render(&self, context: &RenderContext<'_>) -> String {
        match &self.value {
            Ok(value) => NamedValue::new(&**value, &self.descriptor.name).render(context),
            Err(error) => {
                let prefix = context
                    .palette
                    .prefix(&self.descriptor.declared_type, &self.descriptor.name);
                let message = format!("(unable to get value : {})", error);
                format!("{} = {}", prefix, context.palette.error(&message))
            }
        }
    }
}

/// Text for a value that never recurses; `None` for containers.
fn terminal_literal(shape: &Shape<'_>, context: &RenderContext<'_>) -> Option<String> {
    let palette = &context.palette;
    let literal = match shape {
        Shape::Null => palette.placeholder(NULL_PLACEHOLDER),
        Shape::Scalar(scalar) => palette.number(&context.options.culture.format(scalar)),
        Shape::String(text) => palette.string(&format!("\"{}\"", escape_line_breaks(text))),
        Shape::Char(c) => palette.string(&format!("'{}'", escape_line_breaks(&c.to_string()))),
        Shape::Enum(value) => palette.enumeration(&value.to_string()),
        Shape::Dictionary(_) | Shape::Enumerable(_) | Shape::Composite => return None,
    };
    Some(literal)
}

/// Quoted literals stay on one line so indentation never lands inside them.
fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

/// An unnamed value as it appears inside a collection entry.
fn render_item(value: &dyn Dump, context: &RenderContext<'_>) -> String {
    let shape = value.shape();
    match terminal_literal(&shape, context) {
        Some(literal) => literal,
        None => {
            let prefix = context.palette.type_name(&value.type_name());
            render_container(value, shape, &prefix, context)
        }
    }
}

fn render_container(
    value: &dyn Dump,
    shape: Shape<'_>,
    prefix: &str,
    context: &RenderContext<'_>,
) -> String {
    match shape {
        Shape::Dictionary(entries) => {
            let entries: Vec<_> = entries
                .into_iter()
                .filter(|(key, value)| !key.is_excluded() && !value.is_excluded())
                .collect();
            render_entries(prefix, entries.len(), context, |child| {
                entries
                    .iter()
                    .map(|(key, value)| {
                        format!(
                            "[{}, {}]",
                            render_item(*key, child),
                            render_item(*value, child)
                        )
                    })
                    .collect()
            })
        }
        Shape::Enumerable(items) => {
            let items: Vec<_> = items
                .into_iter()
                .filter(|item| !item.is_excluded())
                .collect();
            render_entries(prefix, items.len(), context, |child| {
                items.iter().map(|item| render_item(*item, child)).collect()
            })
        }
        _ => render_composite(value, prefix, context),
    }
}

/// Shared layout for dictionaries and enumerables: a counted header, then
/// one indexed entry per line.
fn render_entries<F>(prefix: &str, count: usize, context: &RenderContext<'_>, entries: F) -> String
where
    F: FnOnce(&RenderContext<'_>) -> Vec<String>,
{
    let mut output = format!("{} [{}]", prefix, count);

    if count == 0 {
        return output;
    }

    if !context.can_descend() {
        trace!(count, "depth budget exhausted, collapsing collection");
        output.push('\n');
        output.push_str(&IndentationHelper::indent(
            &context.palette.placeholder(ELLIPSIS),
            1,
        ));
        return output;
    }

    let child = context.descend();
    for (index, entry) in entries(&child).into_iter().enumerate() {
        let line = format!("[{}] {}", index, entry);
        output.push('\n');
        output.push_str(&IndentationHelper::indent(&IndentationHelper::hang(&line), 1));
    }

    output
}

fn render_composite(value: &dyn Dump, prefix: &str, context: &RenderContext<'_>) -> String {
    if !context.can_descend() {
        trace!(type_name = %value.type_name(), "depth budget exhausted, collapsing composite");
        return format!("{} = {}", prefix, context.palette.placeholder(ELLIPSIS));
    }

    // A type-supplied rendering replaces the member walk entirely
    if let Some(custom) = value.custom_dump(context.options) {
        return custom;
    }

    let child = context.descend();
    let members = ReflectionWalker::new(context.options).resolve(value);
    let body = members
        .iter()
        .map(|member| member.render(&child))
        .collect::<Vec<_>>()
        .join("\n");

    let mut output = prefix.to_string();

    if context.options.with_title {
        output.push_str("\n{");
        if !body.is_empty() {
            output.push('\n');
            output.push_str(&IndentationHelper::indent(&body, 1));
        }
        output.push_str("\n}");
    } else if !body.is_empty() {
        output.push('\n');
        output.push_str(&IndentationHelper::indent(&body, 1));
    }

    output
}
