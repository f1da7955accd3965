//! Spatial hit testing for canvas front ends
//!
//! None of this participates in the algorithms. Each query returns the
//! collection index of the nearest match; equally near matches resolve to
//! the higher index (the element drawn last).

use super::structure::Graph;
use super::types::Point;

/// Distance from `point` to the segment `start..end`
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f32 {
    let length_squared = start.distance_squared(end);
    if length_squared == 0.0 {
        return point.distance(start);
    }

    let projection = ((point.x - start.x) * (end.x - start.x)
        + (point.y - start.y) * (end.y - start.y))
        / length_squared;
    let t = projection.clamp(0.0, 1.0);
    let closest = Point::new(
        start.x + t * (end.x - start.x),
        start.y + t * (end.y - start.y),
    );
    point.distance(closest)
}

/// Index of the nearest candidate, ties to the later one
fn nearest(candidates: impl Iterator<Item = (usize, f32)>) -> Option<usize> {
    candidates
        .fold(None, |best: Option<(usize, f32)>, (index, distance)| match best {
            Some((_, best_distance)) if best_distance < distance => best,
            _ => Some((index, distance)),
        })
        .map(|(index, _)| index)
}

impl Graph {
    /// Vertex whose disc contains `point`
    pub fn vertex_at(&self, point: Point) -> Option<usize> {
        let radius = self.vertex_radius();
        nearest(
            self.vertices()
                .iter()
                .enumerate()
                .filter(|(_, v)| v.contains_point(point, radius))
                .map(|(i, v)| (i, v.position.distance(point))),
        )
    }

    /// Edge whose segment passes within one vertex radius of `point`
    pub fn edge_at(&self, point: Point) -> Option<usize> {
        let radius = self.vertex_radius();
        nearest(self.edges().iter().enumerate().filter_map(|(i, edge)| {
            let from = self.vertex(edge.from())?.position;
            let to = self.vertex(edge.to())?.position;
            let distance = distance_to_segment(point, from, to);
            (distance < radius).then_some((i, distance))
        }))
    }

    /// Edge whose weight label (drawn at the segment midpoint) lies within
    /// `threshold` of `point`
    pub fn edge_label_at(&self, point: Point, threshold: f32) -> Option<usize> {
        nearest(self.edges().iter().enumerate().filter_map(|(i, edge)| {
            let from = self.vertex(edge.from())?.position;
            let to = self.vertex(edge.to())?.position;
            let distance = from.midpoint(to).distance(point);
            (distance < threshold).then_some((i, distance))
        }))
    }
}
