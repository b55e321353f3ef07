//! Text rendering of a [`KruskalRun`] as a step-by-step teaching trace.
//!
//! Edges are written `(u;v:w)`, edge sets `{...}`, and the empty set `Ø`.

use std::fmt;

use crate::graph::{Edge, KruskalRun, Step, Termination, Weight};

const EMPTY_SET: &str = "Ø";

/// What parts of the trace to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render the input, the sorted edges and every step before the summary.
    pub steps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { steps: true }
    }
}

/// Formats a slice of edges as `{(1;2:1), (2;3:2)}`.
pub struct EdgeSet<'a>(pub &'a [Edge]);

impl fmt::Display for EdgeSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, edge) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str("}")
    }
}

/// Formats the weight sum of a tree as `1 + 2 + 3 = 6`, or `0` when empty.
pub struct WeightSum<'a> {
    pub tree: &'a [Edge],
    pub total: Weight,
}

impl fmt::Display for WeightSum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return write!(f, "{}", self.total);
        }
        for (i, edge) in self.tree.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}", edge.weight)?;
        }
        write!(f, " = {}", self.total)
    }
}

/// The full narrative for one run.
///
/// # Examples
/// ```
/// use kruskal_trace::graph::{kruskal, Graph};
/// use kruskal_trace::render::{RenderOptions, Trace};
///
/// let graph: Graph = "3 3\n1 2 1\n2 3 2\n1 3 3".parse().unwrap();
/// let run = kruskal::run(&graph).unwrap();
/// let text = Trace::new(&run, RenderOptions::default()).to_string();
/// assert!(text.contains("Total weight: 1 + 2 = 3"));
/// ```
pub struct Trace<'a> {
    run: &'a KruskalRun,
    options: RenderOptions,
}

impl<'a> Trace<'a> {
    pub fn new(run: &'a KruskalRun, options: RenderOptions) -> Self {
        Self { run, options }
    }

    fn write_input(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.run;
        writeln!(f, "Initial graph:")?;
        writeln!(f, "Vertices: {}", run.num_vertices)?;
        writeln!(f, "Edges: {}", run.original.len())?;
        writeln!(f)?;
        writeln!(f, "E = {}", EdgeSet(&run.original))?;
        writeln!(f)?;
        writeln!(f, "Sorted: E = {}", EdgeSet(&run.sorted))?;
        writeln!(f)?;
        write!(f, "Weights:")?;
        for weight in run.distinct_weights() {
            write!(f, "{weight:>4}")?;
        }
        writeln!(f)?;
        writeln!(f)
    }

    fn write_step(&self, f: &mut fmt::Formatter<'_>, number: usize, step: &Step) -> fmt::Result {
        let run = self.run;
        let edge = &step.edge;
        let tree_before = if step.is_accepted() {
            step.tree_len - 1
        } else {
            step.tree_len
        };

        writeln!(f, "Step {number}:")?;
        writeln!(f)?;
        writeln!(
            f,
            "|T| = {} <= {} and E != {EMPTY_SET}",
            tree_before,
            run.required_edges()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "E = E\\({};{}) = {}",
            edge.src,
            edge.dst,
            EdgeSet(run.remaining_after(step))
        )?;
        writeln!(f)?;
        if let Some(cycle) = step.cycle() {
            writeln!(
                f,
                "Edge ({};{}) closes the cycle {cycle} so it is discarded",
                edge.src, edge.dst
            )?;
            writeln!(f)?;
        }
        writeln!(f, "T = {}", EdgeSet(run.tree_after(step)))?;
        writeln!(f)
    }

    fn write_stop(&self, f: &mut fmt::Formatter<'_>, number: usize) -> fmt::Result {
        let run = self.run;
        writeln!(f, "Step {number}:")?;
        writeln!(f)?;
        match run.termination() {
            Termination::SpanningTree => writeln!(
                f,
                "|T| = {} = {} and E = {EMPTY_SET}",
                run.tree.len(),
                run.required_edges()
            )?,
            Termination::SpanningForest { components } => {
                writeln!(
                    f,
                    "|T| = {} < {} and E = {EMPTY_SET}",
                    run.tree.len(),
                    run.required_edges()
                )?;
                writeln!(f)?;
                writeln!(f, "The graph is disconnected: {components} components.")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Algorithm stops.")?;
        writeln!(f)?;
        writeln!(f)
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.run;
        match run.termination() {
            Termination::SpanningTree => writeln!(f, "Minimum spanning tree:")?,
            Termination::SpanningForest { components } => {
                writeln!(f, "Minimum spanning forest ({components} components):")?
            }
        }
        writeln!(f)?;
        writeln!(f, "T = {}", EdgeSet(&run.tree))?;
        writeln!(f)?;
        writeln!(
            f,
            "Total weight: {}",
            WeightSum {
                tree: &run.tree,
                total: run.total_weight,
            }
        )
    }
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.steps {
            self.write_input(f)?;
            writeln!(f, "Steps:")?;
            writeln!(f)?;
            for (i, step) in self.run.steps.iter().enumerate() {
                self.write_step(f, i + 1, step)?;
            }
            self.write_stop(f, self.run.steps.len() + 1)?;
        }
        self.write_summary(f)
    }
}
