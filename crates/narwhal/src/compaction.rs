//! Longest-path compaction.
//!
//! Assigns one axis's coordinates from a constraint graph built by the orthogonal
//! representation stage. The constructive pass computes the unique smallest feasible
//! assignment; the improvement pass tightens it by sliding rigid groups of nodes.
//!
//! The engine holds only options. All scratch state lives in the call, so one engine can serve
//! many constraint graphs, including from several threads.

mod constraint;
mod longest_path;
mod tighten;

pub use constraint::{
    ConstraintEdge, ConstraintGraph, ConstraintKind, Coord, Drawing, RoutingChannel,
    constraint_graph,
};

use crate::error::Result;
use crate::options::CompactionOptions;
use longest_path::Dag;

#[derive(Debug, Clone, Copy, Default)]
pub struct LongestPathCompaction {
    options: CompactionOptions,
}

impl LongestPathCompaction {
    pub fn new(tighten: bool, max_improvement_steps: usize) -> Self {
        Self::with_options(CompactionOptions {
            tighten,
            max_improvement_steps,
            ..Default::default()
        })
    }

    pub fn with_options(options: CompactionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CompactionOptions {
        self.options
    }

    pub fn tighten(&self) -> bool {
        self.options.tighten
    }

    pub fn set_tighten(&mut self, select: bool) -> &mut Self {
        self.options.tighten = select;
        self
    }

    pub fn max_improvement_steps(&self) -> usize {
        self.options.max_improvement_steps
    }

    pub fn set_max_improvement_steps(&mut self, max_steps: usize) -> &mut Self {
        self.options.max_improvement_steps = max_steps;
        self
    }

    pub fn preserve_extent(&self) -> bool {
        self.options.preserve_extent
    }

    pub fn set_preserve_extent(&mut self, select: bool) -> &mut Self {
        self.options.preserve_extent = select;
        self
    }

    /// Writes the smallest feasible coordinate of every constraint node into `drawing`.
    ///
    /// Each node ends up at the maximum of `pos(u) + length` over its incoming constraints, or
    /// at `0` without any. Fails with [`Error::PositiveCycle`](crate::Error::PositiveCycle),
    /// leaving `drawing` untouched, when the constraints cannot be satisfied.
    pub fn constructive_heuristics<L: Coord>(
        &self,
        graph: &ConstraintGraph<L>,
        routing: &RoutingChannel<L>,
        drawing: &mut Drawing<L>,
    ) -> Result<()> {
        let dag = Dag::build(graph, routing);
        let pos = dag.longest_paths()?;
        dag.write(drawing, &pos);
        tracing::debug!(
            nodes = dag.node_count(),
            edges = dag.edges.len(),
            "constructive compaction done"
        );
        Ok(())
    }

    /// Shortens the total constraint edge length of `drawing` without breaking any constraint.
    ///
    /// Starts from the drawing's coordinates when they cover every node and are feasible,
    /// otherwise from the constructive solution. Does nothing when `tighten` is off.
    pub fn improvement_heuristics<L: Coord>(
        &self,
        graph: &ConstraintGraph<L>,
        routing: &RoutingChannel<L>,
        drawing: &mut Drawing<L>,
    ) -> Result<()> {
        if !self.options.tighten {
            return Ok(());
        }

        let dag = Dag::build(graph, routing);
        let mut pos = match dag.read(drawing) {
            Some(pos) if dag.is_feasible(&pos) => pos,
            Some(_) => {
                tracing::warn!("drawing violates its constraints; tightening from longest paths");
                dag.longest_paths()?
            }
            None => {
                tracing::debug!("drawing is incomplete; tightening from longest paths");
                dag.longest_paths()?
            }
        };

        let before = dag.total_length(&pos);
        let moves = tighten::tighten(
            &dag,
            &mut pos,
            self.options.max_improvement_steps,
            self.options.preserve_extent,
        );
        dag.write(drawing, &pos);
        tracing::debug!(
            moves,
            ?before,
            after = ?dag.total_length(&pos),
            "tightened compaction"
        );
        Ok(())
    }
}
