use serde::Serialize;

use super::types::{Marker, Point, VertexId};

/// Radius used for collision and hit testing unless a graph overrides it
pub const DEFAULT_VERTEX_RADIUS: f32 = 27.5;

/// A graph vertex together with the traversal state the UI renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    id: VertexId,
    pub position: Point,
    pub(crate) marker: Marker,
    pub(crate) discovery_time: u32,
    pub(crate) finish_time: u32,
    pub(crate) highlighted: bool,
}

impl Vertex {
    pub fn new(id: VertexId, position: Point) -> Self {
        Self {
            id,
            position,
            marker: Marker::Unvisited,
            discovery_time: 0,
            finish_time: 0,
            highlighted: false,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Pre-order timestamp of the last depth-first run
    pub fn discovery_time(&self) -> u32 {
        self.discovery_time
    }

    /// Post-order timestamp of the last depth-first run
    pub fn finish_time(&self) -> u32 {
        self.finish_time
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Two vertices collide when their discs of `radius` would overlap
    pub fn collides(&self, other: &Vertex, radius: f32) -> bool {
        let reach = 2.0 * radius;
        self.position.distance_squared(other.position) < reach * reach
    }

    pub fn contains_point(&self, point: Point, radius: f32) -> bool {
        self.position.distance_squared(point) <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_uses_twice_the_radius() {
        let a = Vertex::new(VertexId::new(1), Point::new(0.0, 0.0));
        let near = Vertex::new(VertexId::new(2), Point::new(54.0, 0.0));
        let far = Vertex::new(VertexId::new(3), Point::new(55.0, 0.0));

        assert!(a.collides(&near, DEFAULT_VERTEX_RADIUS));
        assert!(!a.collides(&far, DEFAULT_VERTEX_RADIUS));
    }

    #[test]
    fn test_contains_point_on_boundary() {
        let v = Vertex::new(VertexId::new(1), Point::new(10.0, 10.0));
        assert!(v.contains_point(Point::new(10.0, 37.5), DEFAULT_VERTEX_RADIUS));
        assert!(!v.contains_point(Point::new(10.0, 38.0), DEFAULT_VERTEX_RADIUS));
    }

    #[test]
    fn test_new_vertex_is_unvisited() {
        let v = Vertex::new(VertexId::new(4), Point::default());
        assert_eq!(v.marker(), Marker::Unvisited);
        assert_eq!(v.discovery_time(), 0);
        assert!(!v.is_highlighted());
    }
}
