use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Edge weight as entered by the user
pub type Weight = i32;

/// Identity of a vertex, assigned by whoever creates it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub const fn new(id: u32) -> Self {
        VertexId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out increasing vertex ids, starting at 1
#[derive(Debug, Clone)]
pub struct VertexIdAllocator {
    next: u32,
}

impl VertexIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue after the given id (e.g. after vertices were created elsewhere)
    pub fn starting_after(last: VertexId) -> Self {
        Self {
            next: last.0.saturating_add(1),
        }
    }

    pub fn allocate(&mut self) -> VertexId {
        let id = VertexId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for VertexIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Canvas coordinate of a vertex. The algorithms never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn distance_squared(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Tri-color traversal state of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Unvisited => write!(f, "unvisited"),
            Marker::InProgress => write!(f, "in_progress"),
            Marker::Done => write!(f, "done"),
        }
    }
}

/// Which edge rules a graph follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// Accumulated path cost with an infinite sentinel.
///
/// Arithmetic never wraps: extending an infinite distance stays infinite, and
/// a finite sum that would overflow clamps to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(i64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITE: Distance = Distance(i64::MAX);

    pub const fn new(value: i64) -> Self {
        Distance(value)
    }

    pub fn is_finite(&self) -> bool {
        *self != Self::INFINITE
    }

    /// Finite value, or `None` for the infinite sentinel
    pub fn value(&self) -> Option<i64> {
        self.is_finite().then_some(self.0)
    }

    /// Distance after following one more edge of `weight`
    pub fn extend(self, weight: Weight) -> Distance {
        if !self.is_finite() {
            return Self::INFINITE;
        }
        match self.0.checked_add(i64::from(weight)) {
            Some(sum) if sum != i64::MAX => Distance(sum),
            _ if weight > 0 => Self::INFINITE,
            _ => Distance(i64::MIN),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}
