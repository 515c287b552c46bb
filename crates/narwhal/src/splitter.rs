//! Per-component layout with repacking.

use crate::components::{ComponentCopy, ComponentPartition};
use crate::error::Result;
use crate::hull::{ConvexHull, MonotoneChain};
use crate::model::AttributedGraph;
use crate::options::SplitterOptions;
use crate::packing::{CcPacker, TileToRowsPacker};
use crate::reassemble::reassemble_drawings;

/// A layout algorithm that works in place on an attributed graph.
pub trait LayoutModule {
    fn call(&self, graph: &mut AttributedGraph) -> Result<()>;
}

impl<F> LayoutModule for F
where
    F: Fn(&mut AttributedGraph) -> Result<()>,
{
    fn call(&self, graph: &mut AttributedGraph) -> Result<()> {
        self(graph)
    }
}

/// Lays out every connected component separately with a secondary layout, then packs the
/// component drawings into one.
pub struct ComponentSplitterLayout {
    options: SplitterOptions,
    secondary_layout: Option<Box<dyn LayoutModule>>,
    packer: Box<dyn CcPacker>,
    hull: Box<dyn ConvexHull>,
}

impl Default for ComponentSplitterLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentSplitterLayout {
    pub fn new() -> Self {
        Self::with_options(SplitterOptions::default())
    }

    pub fn with_options(options: SplitterOptions) -> Self {
        Self {
            options,
            secondary_layout: None,
            packer: Box::new(TileToRowsPacker),
            hull: Box::new(MonotoneChain),
        }
    }

    pub fn options(&self) -> SplitterOptions {
        self.options
    }

    pub fn border(&self) -> i64 {
        self.options.border
    }

    pub fn set_border(&mut self, border: i64) -> &mut Self {
        self.options.border = border;
        self
    }

    pub fn target_ratio(&self) -> f64 {
        self.options.target_ratio
    }

    pub fn set_target_ratio(&mut self, ratio: f64) -> &mut Self {
        self.options.target_ratio = ratio;
        self
    }

    pub fn set_secondary_layout(&mut self, layout: impl LayoutModule + 'static) -> &mut Self {
        self.secondary_layout = Some(Box::new(layout));
        self
    }

    pub fn clear_secondary_layout(&mut self) -> &mut Self {
        self.secondary_layout = None;
        self
    }

    pub fn set_packer(&mut self, packer: impl CcPacker + 'static) -> &mut Self {
        self.packer = Box::new(packer);
        self
    }

    pub fn set_hull(&mut self, hull: impl ConvexHull + 'static) -> &mut Self {
        self.hull = Box::new(hull);
        self
    }

    /// Lays out `graph` component by component and reassembles the result in place.
    ///
    /// Without a secondary layout, or on an empty graph, nothing happens. A failing secondary
    /// layout aborts the call; components merged before it keep their new coordinates.
    pub fn call(&self, graph: &mut AttributedGraph) -> Result<()> {
        let Some(layout) = self.secondary_layout.as_deref() else {
            return Ok(());
        };

        let ccs = ComponentPartition::new(&*graph);
        if ccs.is_empty() {
            return Ok(());
        }
        tracing::debug!(components = ccs.len(), "laying out components");

        for i in 0..ccs.len() {
            let mut copy = ComponentCopy::new(graph, &ccs, i);
            layout.call(&mut copy.graph)?;
            copy.merge_into(graph);
            tracing::trace!(component = i, nodes = ccs.nodes(i).len(), "merged component");
        }

        reassemble_drawings(
            graph,
            &ccs,
            &self.options,
            self.hull.as_ref(),
            self.packer.as_ref(),
        );
        Ok(())
    }
}
