//! Convex polygon container.
//!
//! Vertices are accumulated freely (duplicates and interior points
//! allowed) and collapsed to the convex hull in a single pass, so that
//! bulk loading a large vertex list stays cheap. The perimeter engine
//! requires the polygon to be hulled first.

use crate::math::point_2d::oriented_angle;
use crate::math::point_2d::triangle_area;
use crate::math::Point2;

/// An ordered sequence of polygon vertices.
///
/// The sequence is only guaranteed convex after [`ConvexPolygon::convex_hull`]
/// has been called; until then it is a plain vertex list. After hulling,
/// vertices are in clockwise order with the lowest-then-rightmost vertex
/// last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
}

impl ConvexPolygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex without any convexity check.
    pub fn add_vertex(&mut self, vertex: Point2) {
        self.vertices.push(vertex);
    }

    /// Deletes all vertices.
    pub fn reset(&mut self) {
        self.vertices.clear();
    }

    /// Returns the number of vertices currently stored.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertices in storage order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Iterates over the vertices in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.vertices.iter()
    }

    /// Area of the polygon, assuming it has been hulled.
    ///
    /// Computed as an unsigned triangle fan from the first vertex, which
    /// is only meaningful for a convex vertex sequence. Returns 0.0 for
    /// fewer than 3 vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }

        let origin = self.vertices[0];
        let mut last = self.vertices[1];
        let mut area = 0.0;
        for &vertex in &self.vertices[2..] {
            area += triangle_area(origin, last, vertex);
            last = vertex;
        }
        area
    }

    /// Replaces the vertex list with its convex hull, in clockwise order.
    ///
    /// Gift wrapping (Jarvis march): start at the lowest, then rightmost,
    /// vertex and repeatedly pick the vertex minimizing the turn angle
    /// from the current edge direction, breaking ties by maximum
    /// distance. Interior vertices are dropped; duplicates of hull
    /// vertices may survive and are ignored by the perimeter engine.
    /// No-op for fewer than 3 vertices.
    pub fn convex_hull(&mut self) {
        let n = self.vertices.len();
        if n < 3 {
            return;
        }

        // Lowest, then rightmost, vertex is certainly on the hull.
        let mut start = 0;
        for (index, vertex) in self.vertices.iter().enumerate().skip(1) {
            let best = self.vertices[start];
            if vertex.y < best.y || (vertex.y == best.y && vertex.x > best.x) {
                start = index;
            }
        }

        let mut hull = vec![self.vertices[start]];
        let mut used = vec![false; n];
        let mut last = self.vertices[start];
        // Seed direction pointing right: a fictitious previous vertex
        // exactly to the left of the start.
        let mut previous = Point2::new(last.x - 1.0, last.y);

        loop {
            let mut min_angle = 6.29; // just above 2*pi
            let mut max_dist = 0.0;
            let mut select = start;

            for (index, vertex) in self.vertices.iter().enumerate() {
                if used[index] || *vertex == last {
                    continue;
                }

                // Angle between the continuation of the previous edge
                // and the candidate direction.
                let ahead = Point2::from(last.coords * 2.0 - previous.coords);
                let angle = oriented_angle(last, ahead, *vertex);
                let dist = (vertex - last).norm();

                if angle < min_angle || (angle == min_angle && dist > max_dist) {
                    min_angle = angle;
                    max_dist = dist;
                    select = index;
                }
            }

            // Wrapped around to the starting vertex.
            if select == start {
                break;
            }

            hull.push(self.vertices[select]);
            used[select] = true;
            previous = last;
            last = self.vertices[select];
        }

        // Discovery order is counterclockwise; stored order is clockwise.
        hull.reverse();
        self.vertices = hull;
    }
}

impl<'a> IntoIterator for &'a ConvexPolygon {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
