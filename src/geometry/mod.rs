//! Polygon adjacency geometry: shared-edge detection over CCW polygons,
//! feeding later outline merging.

pub mod edge_group;

pub use edge_group::{CompositionPolygon, EdgeHandle, PolygonEdge, PolygonEdgeGroup, PolygonHandle};
