use crate::config::DumpOptions;
use crate::renderer::components::Palette;

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'o> {
    pub options: &'o DumpOptions,
    /// Remaining recursion budget.
    pub max_depth: usize,
    pub palette: Palette,
}

impl<'o> RenderContext<'o> {
    pub fn new(options: &'o DumpOptions) -> Self {
        Self {
            options,
            max_depth: options.max_depth,
            palette: Palette::new(options.with_colors),
        }
    }

    pub fn with_depth(&self, max_depth: usize) -> Self {
        Self {
            options: self.options,
            max_depth,
            palette: self.palette,
        }
    }

    /// Context for the children of a container.
    pub fn descend(&self) -> Self {
        self.with_depth(self.max_depth.saturating_sub(1))
    }

    /// Containers only expand while more than one level is left.
    pub fn can_descend(&self) -> bool {
        self.max_depth > 1
    }
}

/// Core rendering trait for anything that ends up as a dump fragment
pub trait Render {
    fn render(&self, context: &RenderContext<'_>) -> String;
}
