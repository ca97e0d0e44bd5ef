//! Shared-edge grouping over a set of CCW-wound polygons.
//!
//! Every polygon walks its wrap-around edges P→Q. The first polygon to walk
//! an edge owns it as the major (CCW) partner; a later polygon walking the
//! same edge Q→P becomes the minor (clockwise-adjacent) partner, marking
//! the two polygons as merge candidates across that boundary. Polygons and
//! edges live in two flat arenas referencing each other by index, so the
//! mutual polygon↔edge relationship carries no ownership cycle.
//!
//! Edge matching is a linear scan per inserted edge (quadratic overall).
//! Fine for the small per-object polygon sets this runs on; a hash map
//! keyed by the unordered endpoint pair would make it O(1) average.

use anyhow::{bail, Result};
use cgmath::Point2;
use tracing::debug;

/// Index into [`PolygonEdgeGroup::polygons`].
pub type PolygonHandle = usize;
/// Index into [`PolygonEdgeGroup::edges`].
pub type EdgeHandle = usize;

/// One recorded boundary edge, identified by its unordered endpoint pair.
#[derive(Debug, Clone)]
pub struct PolygonEdge {
    /// First endpoint, in the direction the major polygon walked it.
    pub p: Point2<f32>,
    /// Second endpoint.
    pub q: Point2<f32>,
    /// Polygon that inserted this edge walking P→Q.
    pub major: PolygonHandle,
    /// Later polygon that walked the same edge Q→P, if any.
    pub minor: Option<PolygonHandle>,
}

impl PolygonEdge {
    /// Whether two polygons meet across this edge.
    pub fn is_shared(&self) -> bool {
        self.minor.is_some()
    }
}

/// A polygon plus the handles of every edge it owns or partners on.
#[derive(Debug, Clone)]
pub struct CompositionPolygon {
    pub points: Vec<Point2<f32>>,
    /// Edge handles in walk order, one per boundary segment.
    pub edges: Vec<EdgeHandle>,
}

/// Edge-ownership graph over a polygon set. Immutable once built.
#[derive(Debug, Clone)]
pub struct PolygonEdgeGroup {
    polygons: Vec<CompositionPolygon>,
    edges: Vec<PolygonEdge>,
}

impl PolygonEdgeGroup {
    /// Build the edge graph for a set of CCW-wound polygons.
    ///
    /// Fails when any unordered endpoint pair is claimed a third time, or
    /// claimed twice in the same direction (which breaks the CCW winding
    /// assumption); either would leave the adjacency ambiguous.
    pub fn build(polygons: Vec<Vec<Point2<f32>>>) -> Result<Self> {
        let mut group = PolygonEdgeGroup {
            polygons: Vec::with_capacity(polygons.len()),
            edges: Vec::new(),
        };

        for points in polygons {
            let handle: PolygonHandle = group.polygons.len();
            let mut edge_handles = Vec::with_capacity(points.len());

            // Wrap-around edges: each point paired with its predecessor.
            for q_index in 0..points.len() {
                let p_index = if q_index == 0 { points.len() - 1 } else { q_index - 1 };
                let p = points[p_index];
                let q = points[q_index];

                let edge_handle = group.claim_edge(handle, p, q)?;
                edge_handles.push(edge_handle);
            }

            group.polygons.push(CompositionPolygon {
                points,
                edges: edge_handles,
            });
        }

        debug!(
            polygon_count = group.polygons.len(),
            edge_count = group.edges.len(),
            "grouped polygon edges"
        );
        Ok(group)
    }

    /// Record polygon `claimant` walking the directed edge `p`→`q`.
    fn claim_edge(
        &mut self,
        claimant: PolygonHandle,
        p: Point2<f32>,
        q: Point2<f32>,
    ) -> Result<EdgeHandle> {
        for (handle, edge) in self.edges.iter_mut().enumerate() {
            if edge.p == q && edge.q == p {
                // An earlier polygon owns this boundary in the opposite
                // direction; the claimant becomes its CW-adjacent partner.
                if edge.minor.is_some() {
                    bail!(
                        "edge ({}, {})-({}, {}) is claimed by a third polygon {}",
                        p.x,
                        p.y,
                        q.x,
                        q.y,
                        claimant
                    );
                }
                edge.minor = Some(claimant);
                return Ok(handle);
            }
            if edge.p == p && edge.q == q {
                bail!(
                    "edge ({}, {})-({}, {}) walked in the same direction by polygons {} and {}; input is not consistently CCW-wound",
                    p.x,
                    p.y,
                    q.x,
                    q.y,
                    edge.major,
                    claimant
                );
            }
        }

        let handle = self.edges.len();
        self.edges.push(PolygonEdge {
            p,
            q,
            major: claimant,
            minor: None,
        });
        Ok(handle)
    }

    pub fn polygons(&self) -> &[CompositionPolygon] {
        &self.polygons
    }

    pub fn edges(&self) -> &[PolygonEdge] {
        &self.edges
    }

    /// Edges where two polygons meet.
    pub fn shared_edges(&self) -> impl Iterator<Item = &PolygonEdge> {
        self.edges.iter().filter(|e| e.is_shared())
    }
}
