//! Cubic hex coordinates and the identities derived from them.
//!
//! This module provides the coordinate types the board graph is keyed on:
//! - `CubeCoord`: identifies a hex tile, always satisfying `x + y + z == 0`
//! - `NodeId`: identifies a vertex as the mean of the three tile centers meeting there
//! - `EdgeId`: identifies a road slot as the unordered pair of its endpoint nodes
//!
//! Node ids are stored as the *sum* of the three centers rather than the mean.
//! The mean is always a multiple of one third, so the sum is exact integer
//! arithmetic and two tiles deriving the same vertex always compare equal. The
//! familiar fractional form (rounded to 3 decimals) is available through
//! [`NodeId::fractional`] and is what the ids serialize as.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Decimal digits kept when a node id is shown in fractional form.
pub const NODE_ID_PRECISION: i32 = 3;

/// Largest magnitude of any tile coordinate component.
///
/// Node ids hold `3 * tile + a + b` with unit offsets `a` and `b`, so this is
/// the bound that keeps every vertex of every valid tile inside `i32`.
pub const MAX_COORD: i32 = (i32::MAX - 2) / 3;

/// A coordinate triple that cannot name a tile or a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
pub enum CoordError {
    #[error("cubic coordinate ({0}, {1}, {2}) does not sum to zero")]
    NotOnPlane(i32, i32, i32),

    #[error("({0}, {1}, {2}) is not a vertex position")]
    NotAVertex(f64, f64, f64),

    #[error("coordinate ({0}, {1}, {2}) is outside the supported range")]
    OutOfRange(i64, i64, i64),

    #[error("{0} and {1} are not consecutive neighbor offsets")]
    NotConsecutiveOffsets(CubeCoord, CubeCoord),
}

/// Cubic coordinate of a hex tile.
///
/// The fields are private so that every value in circulation satisfies the
/// `x + y + z == 0` invariant; deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct CubeCoord {
    x: i32,
    y: i32,
    z: i32,
}

/// The six unit offsets around a tile, in rotational order.
///
/// Consecutive pairs (wrapping) name the six vertices of a tile, so this order
/// is load-bearing for every node id in the system.
const NEIGHBOR_OFFSETS: [CubeCoord; 6] = [
    CubeCoord::unchecked(1, -1, 0),
    CubeCoord::unchecked(1, 0, -1),
    CubeCoord::unchecked(0, 1, -1),
    CubeCoord::unchecked(-1, 1, 0),
    CubeCoord::unchecked(-1, 0, 1),
    CubeCoord::unchecked(0, -1, 1),
];

/// The six unit offsets in cubic space, in the order vertex ids are derived.
pub const fn neighbor_offsets() -> [CubeCoord; 6] {
    NEIGHBOR_OFFSETS
}

impl CubeCoord {
    /// The center of the board.
    pub const ORIGIN: CubeCoord = CubeCoord::unchecked(0, 0, 0);

    /// Create a coordinate, rejecting triples off the `x + y + z == 0` plane
    /// or with a component beyond [`MAX_COORD`].
    pub const fn new(x: i32, y: i32, z: i32) -> Result<Self, CoordError> {
        if x as i64 + y as i64 + z as i64 != 0 {
            return Err(CoordError::NotOnPlane(x, y, z));
        }
        let max = MAX_COORD as u32;
        if x.unsigned_abs() > max || y.unsigned_abs() > max || z.unsigned_abs() > max {
            return Err(CoordError::OutOfRange(x as i64, y as i64, z as i64));
        }
        Ok(Self { x, y, z })
    }

    fn from_wide(x: i64, y: i64, z: i64) -> Result<Self, CoordError> {
        match (i32::try_from(x), i32::try_from(y), i32::try_from(z)) {
            (Ok(x), Ok(y), Ok(z)) => Self::new(x, y, z),
            _ => Err(CoordError::OutOfRange(x, y, z)),
        }
    }

    const fn unchecked(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Translate by another coordinate, failing past [`MAX_COORD`]
    pub fn offset(self, by: CubeCoord) -> Result<Self, CoordError> {
        Self::from_wide(
            i64::from(self.x) + i64::from(by.x),
            i64::from(self.y) + i64::from(by.y),
            i64::from(self.z) + i64::from(by.z),
        )
    }

    /// The neighboring tiles in [`neighbor_offsets`] order, skipping any past
    /// the edge of the coordinate range
    pub fn neighbors(self) -> impl Iterator<Item = CubeCoord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |d| self.offset(d).ok())
    }

    /// Distance to another tile in hex steps
    pub fn distance_to(&self, other: &CubeCoord) -> u32 {
        let d = |a: i32, b: i32| (i64::from(a) - i64::from(b)).unsigned_abs();
        let steps = (d(self.x, other.x) + d(self.y, other.y) + d(self.z, other.z)) / 2;
        steps as u32
    }

    /// Tiles exactly `radius` steps away, in one walk around the ring.
    /// Positions past [`MAX_COORD`] are skipped.
    pub fn ring(self, radius: u32) -> Vec<CubeCoord> {
        if radius == 0 {
            return vec![self];
        }
        let wide = |c: CubeCoord| [i64::from(c.x), i64::from(c.y), i64::from(c.z)];
        let [sx, sy, sz] = wide(NEIGHBOR_OFFSETS[4]);
        let [cx, cy, cz] = wide(self);
        let r = i64::from(radius);
        let mut pos = [cx + r * sx, cy + r * sy, cz + r * sz];

        let mut tiles = Vec::new();
        for side in NEIGHBOR_OFFSETS {
            let step = wide(side);
            for _ in 0..radius {
                if let Ok(tile) = Self::from_wide(pos[0], pos[1], pos[2]) {
                    tiles.push(tile);
                }
                for (p, d) in pos.iter_mut().zip(step) {
                    *p += d;
                }
            }
        }
        tiles
    }

    /// Ids of the six vertices around this tile.
    ///
    /// Vertex `i` sits between neighbor `i` and neighbor `i + 1`, so vertices
    /// `i` and `i + 1` are the two ends of one side of the hex.
    pub fn vertex_ids(&self) -> [NodeId; 6] {
        std::array::from_fn(|i| vertex_sum(*self, NEIGHBOR_OFFSETS[i], NEIGHBOR_OFFSETS[(i + 1) % 6]))
    }
}

impl TryFrom<[i32; 3]> for CubeCoord {
    type Error = CoordError;

    fn try_from([x, y, z]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

impl From<CubeCoord> for [i32; 3] {
    fn from(c: CubeCoord) -> Self {
        [c.x, c.y, c.z]
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Id of the vertex shared by `tile` and its neighbors at `a` and `b`.
///
/// `a` and `b` must be consecutive entries of [`neighbor_offsets`]; the result
/// is the coordinate-wise mean of the three tile centers.
pub fn vertex_id(tile: CubeCoord, a: CubeCoord, b: CubeCoord) -> Result<NodeId, CoordError> {
    let unit = |c: CubeCoord| NEIGHBOR_OFFSETS.contains(&c);
    if !unit(a) || !unit(b) || a.distance_to(&b) != 1 {
        return Err(CoordError::NotConsecutiveOffsets(a, b));
    }
    Ok(vertex_sum(tile, a, b))
}

/// `3 * tile + a + b` for unit offsets; cannot overflow while `tile` is
/// within [`MAX_COORD`].
fn vertex_sum(tile: CubeCoord, a: CubeCoord, b: CubeCoord) -> NodeId {
    NodeId {
        x: 3 * tile.x + a.x + b.x,
        y: 3 * tile.y + a.y + b.y,
        z: 3 * tile.z + a.z + b.z,
    }
}

/// Vertex identity, stored in thirds (the sum of the three tile centers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct NodeId {
    x: i32,
    y: i32,
    z: i32,
}

impl NodeId {
    /// Fractional coordinates rounded to [`NODE_ID_PRECISION`] decimals
    pub fn fractional(&self) -> (f64, f64, f64) {
        (thirds_to_f64(self.x), thirds_to_f64(self.y), thirds_to_f64(self.z))
    }

    /// Recover an id from its fractional form.
    ///
    /// Accepts anything within rounding distance of a real vertex position, so
    /// values produced by [`NodeId::fractional`] always round-trip.
    pub fn from_fractional(fx: f64, fy: f64, fz: f64) -> Result<Self, CoordError> {
        let not_a_vertex = CoordError::NotAVertex(fx, fy, fz);
        let limit = f64::from(MAX_COORD) + 1.0;
        let snap = |v: f64| {
            (v.is_finite() && v.abs() <= limit).then(|| (v * 3.0).round() as i32)
        };
        let (Some(x), Some(y), Some(z)) = (snap(fx), snap(fy), snap(fz)) else {
            return Err(not_a_vertex);
        };
        let residue = x.rem_euclid(3);
        // A tile center has every component divisible by 3; a vertex has all
        // three components sharing the same non-zero residue.
        if i64::from(x) + i64::from(y) + i64::from(z) != 0
            || residue == 0
            || y.rem_euclid(3) != residue
            || z.rem_euclid(3) != residue
        {
            return Err(not_a_vertex);
        }
        Ok(Self { x, y, z })
    }

    /// Tile coordinates of the hexes meeting at this vertex, whether or not
    /// they are on the board. Tiles past [`MAX_COORD`] are skipped.
    pub fn surrounding_tiles(&self) -> Vec<CubeCoord> {
        let r = self.x.rem_euclid(3);
        let base = |v: i32| i64::from((v - r) / 3);
        let (bx, by, bz) = (base(self.x), base(self.y), base(self.z));
        let candidates = if r == 1 {
            [(bx, by, bz + 1), (bx + 1, by, bz), (bx, by + 1, bz)]
        } else {
            [(bx, by + 1, bz + 1), (bx + 1, by, bz + 1), (bx + 1, by + 1, bz)]
        };
        candidates
            .into_iter()
            .filter_map(|(x, y, z)| CubeCoord::from_wide(x, y, z).ok())
            .collect()
    }
}

fn thirds_to_f64(v: i32) -> f64 {
    let scale = 10f64.powi(NODE_ID_PRECISION);
    (f64::from(v) / 3.0 * scale).round() / scale
}

impl TryFrom<[f64; 3]> for NodeId {
    type Error = CoordError;

    fn try_from([x, y, z]: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_fractional(x, y, z)
    }
}

impl From<NodeId> for [f64; 3] {
    fn from(id: NodeId) -> Self {
        let (x, y, z) = id.fractional();
        [x, y, z]
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.fractional();
        write!(f, "({x:.3}, {y:.3}, {z:.3})")
    }
}

/// Road slot identity: the unordered pair of its endpoint node ids.
///
/// The pair is kept sorted so that `EdgeId::new(a, b) == EdgeId::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[NodeId; 2]", into = "[NodeId; 2]")]
pub struct EdgeId {
    a: NodeId,
    b: NodeId,
}

impl EdgeId {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Both endpoints, smaller id first
    pub fn endpoints(&self) -> [NodeId; 2] {
        [self.a, self.b]
    }

    /// Whether `node` is one of the endpoints
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// The endpoint that is not `node`, if `node` is an endpoint
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

impl From<[NodeId; 2]> for EdgeId {
    fn from([a, b]: [NodeId; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<EdgeId> for [NodeId; 2] {
    fn from(e: EdgeId) -> Self {
        e.endpoints()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
