//! Step events and the pull-based run driver
//!
//! Every algorithm is a state machine behind [`Algorithm`]. A [`Run`] turns
//! it into an iterator of [`Step`]s: each call to `next` advances the
//! algorithm until it has changed something worth redrawing. Pacing belongs
//! to the consumer, and dropping a run part way through cancels it.

use serde::Serialize;
use std::collections::VecDeque;

use super::structure::Graph;
use super::types::{Distance, Marker, VertexId};

/// A visually significant state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Step {
    /// A vertex changed its traversal marker
    VertexMarked { vertex: VertexId, marker: Marker },
    /// A traversal followed an edge to an undiscovered vertex
    EdgeTraversed { from: VertexId, to: VertexId },
    /// Relaxing `from -> to` improved the distance of `to`
    EdgeRelaxed {
        from: VertexId,
        to: VertexId,
        distance: Distance,
    },
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::VertexMarked { vertex, marker } => write!(f, "vertex {} -> {}", vertex, marker),
            Step::EdgeTraversed { from, to } => write!(f, "edge {} -> {} traversed", from, to),
            Step::EdgeRelaxed { from, to, distance } => {
                write!(f, "edge {} -> {} relaxed, distance {}", from, to, distance)
            }
        }
    }
}

/// Receives every step together with the graph as it looks right after it
pub trait StepObserver {
    fn on_step(&mut self, step: &Step, graph: &Graph);
}

impl<F> StepObserver for F
where
    F: FnMut(&Step, &Graph),
{
    fn on_step(&mut self, step: &Step, graph: &Graph) {
        self(step, graph)
    }
}

/// A resumable algorithm over an exclusively borrowed graph
pub trait Algorithm {
    type Output;

    /// Perform one unit of work, pushing any resulting steps.
    /// Returns `false` once the algorithm has finished.
    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool;

    fn graph(&self) -> &Graph;

    fn into_output(self) -> Self::Output;
}

/// Iterator over the steps of one algorithm run
pub struct Run<A> {
    algorithm: A,
    pending: VecDeque<Step>,
    finished: bool,
    emitted: usize,
}

impl<A: Algorithm> Run<A> {
    pub(crate) fn new(algorithm: A) -> Self {
        Self {
            algorithm,
            pending: VecDeque::new(),
            finished: false,
            emitted: 0,
        }
    }

    /// The graph as the algorithm has left it so far
    pub fn graph(&self) -> &Graph {
        self.algorithm.graph()
    }

    /// Number of steps handed out so far
    pub fn steps_emitted(&self) -> usize {
        self.emitted
    }

    pub fn is_finished(&self) -> bool {
        self.finished && self.pending.is_empty()
    }

    /// Run to completion without observing and return the outcome
    pub fn finish(mut self) -> A::Output {
        while self.next().is_some() {}
        self.algorithm.into_output()
    }

    /// Run to completion, handing each step to `observer`
    pub fn observe(mut self, observer: &mut dyn StepObserver) -> A::Output {
        while let Some(step) = self.next() {
            observer.on_step(&step, self.algorithm.graph());
        }
        self.algorithm.into_output()
    }
}

impl<A: Algorithm> Iterator for Run<A> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.pending.pop_front() {
                self.emitted += 1;
                return Some(step);
            }
            if self.finished {
                return None;
            }
            if !self.algorithm.advance(&mut self.pending) {
                self.finished = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emits one marker step per vertex, then stops
    struct MarkAll<'g> {
        graph: &'g mut Graph,
        cursor: usize,
    }

    impl Algorithm for MarkAll<'_> {
        type Output = usize;

        fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
            let Some(id) = self.graph.vertices().get(self.cursor).map(|v| v.id()) else {
                return false;
            };
            self.graph.set_marker(id, Marker::Done);
            steps.push_back(Step::VertexMarked {
                vertex: id,
                marker: Marker::Done,
            });
            self.cursor += 1;
            true
        }

        fn graph(&self) -> &Graph {
            self.graph
        }

        fn into_output(self) -> usize {
            self.cursor
        }
    }

    fn two_vertices() -> Graph {
        let mut graph = Graph::directed();
        for (id, x) in [(1, 0.0), (2, 100.0)] {
            graph.add_vertex(crate::graph::Vertex::new(
                VertexId::new(id),
                crate::graph::Point::new(x, 0.0),
            ));
        }
        graph
    }

    #[test]
    fn test_run_is_lazy() {
        let mut graph = two_vertices();
        let mut run = Run::new(MarkAll {
            graph: &mut graph,
            cursor: 0,
        });

        assert_eq!(run.graph().marker_of(VertexId::new(1)), Marker::Unvisited);
        assert!(run.next().is_some());
        assert_eq!(run.graph().marker_of(VertexId::new(1)), Marker::Done);
        assert_eq!(run.graph().marker_of(VertexId::new(2)), Marker::Unvisited);
        assert_eq!(run.steps_emitted(), 1);
    }

    #[test]
    fn test_observe_sees_every_step() {
        let mut graph = two_vertices();
        let run = Run::new(MarkAll {
            graph: &mut graph,
            cursor: 0,
        });

        let mut seen = Vec::new();
        let output = run.observe(&mut |step: &Step, graph: &Graph| {
            seen.push((*step, graph.vertex_count()));
        });

        assert_eq!(output, 2);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_step_json_shape() {
        let step = Step::EdgeRelaxed {
            from: VertexId::new(1),
            to: VertexId::new(2),
            distance: Distance::new(4),
        };
        let json = serde_json::to_value(step).unwrap();
        assert_eq!(json["event"], "edge_relaxed");
        assert_eq!(json["from"], 1);
        assert_eq!(json["distance"], 4);
    }
}
