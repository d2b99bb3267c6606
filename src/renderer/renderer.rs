use std::io;

use tracing::debug;

use crate::config::DumpOptions;
use crate::model::Dump;
use crate::renderer::renders::NamedValue;
use crate::renderer::text_box::{BoxRenderer, LineBox};
use crate::renderer::traits::*;
use crate::sink::DumpSink;

/// Dumps values with a fixed set of options and box renderer.
///
/// Build one at the application boundary and pass it around instead of
/// reaching for shared defaults.
#[derive(Debug, Clone, Default)]
pub struct Dumper<B = LineBox> {
    options: DumpOptions,
    boxer: B,
}

impl Dumper<LineBox> {
    pub fn new(options: DumpOptions) -> Self {
        Self {
            options,
            boxer: LineBox,
        }
    }
}

impl<B: BoxRenderer> Dumper<B> {
    pub fn with_box_renderer(options: DumpOptions, boxer: B) -> Self {
        Self { options, boxer }
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Render `value` under `name`. Excluded types produce an empty string.
    pub fn dump(&self, value: &dyn Dump, name: &str) -> String {
        if value.is_excluded() {
            return String::new();
        }

        debug!(
            type_name = %value.type_name(),
            name,
            max_depth = self.options.max_depth,
            "dumping value"
        );

        let context = RenderContext::new(&self.options);
        NamedValue::new(value, name).render(&context)
    }

    /// Same as [`dump`](Self::dump), framed by the box renderer. The title is
    /// the value's type and name when `with_title` is set.
    pub fn dump_box(&self, value: &dyn Dump, name: &str) -> String {
        let body = self.dump(value, name);
        let title = if self.options.with_title {
            if name.is_empty() {
                value.type_name().into_owned()
            } else {
                format!("{} {}", value.type_name(), name)
            }
        } else {
            String::new()
        };

        self.boxer.render(&title, &body, self.options.box_width)
    }

    /// Dump and hand the text to a sink.
    pub fn dump_to<S: DumpSink + ?Sized>(
        &self,
        sink: &mut S,
        value: &dyn Dump,
        name: &str,
    ) -> io::Result<()> {
        let text = self.dump(value, name);
        sink.emit(name, &text)
    }
}
