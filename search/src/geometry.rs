//! Plane geometry shared by vertices, heuristics and the trace recorder.
//!
//! Coordinates are grid coordinates as `f64`. Rows are horizontal lines
//! `y = row`; an [`Interval`] is a closed span of one row.

use sha2::{Digest, Sha256};

/// Default tolerance for coordinate and cost comparisons.
pub const EPSILON: f64 = 1e-7;

/// Domain prefix for root point fingerprints.
pub const DOMAIN_ROOT_POINT: &[u8] = b"ANYA::ROOT_POINT::V1\0";

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise equality within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

/// A closed span `[left, right]` on the row `y = row`.
///
/// A degenerate interval (`left == right`) covers a single point; start
/// vertices are represented that way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub row: f64,
    pub left: f64,
    pub right: f64,
}

impl Interval {
    /// Build an interval, swapping the endpoints if given in reverse.
    #[must_use]
    pub fn new(row: f64, left: f64, right: f64) -> Self {
        if right < left {
            Self {
                row,
                left: right,
                right: left,
            }
        } else {
            Self { row, left, right }
        }
    }

    /// The degenerate interval covering exactly `point`.
    #[must_use]
    pub const fn at(point: Point) -> Self {
        Self {
            row: point.y,
            left: point.x,
            right: point.x,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Containment with the default [`EPSILON`] tolerance.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_within(point, EPSILON)
    }

    /// Containment where both the row test and the endpoint tests allow
    /// `epsilon` of slack.
    #[must_use]
    pub fn contains_within(&self, point: Point, epsilon: f64) -> bool {
        (point.y - self.row).abs() <= epsilon
            && point.x >= self.left - epsilon
            && point.x <= self.right + epsilon
    }
}

/// Deterministic 64-bit fingerprint of a root point.
///
/// `sha256(DOMAIN_ROOT_POINT || x.to_bits() || y.to_bits())`, truncated to the
/// first 8 bytes (little-endian). Negative zero is folded onto positive zero so
/// that equal coordinates always fingerprint equally.
#[must_use]
pub fn root_fingerprint(point: Point) -> u64 {
    // -0.0 + 0.0 == +0.0 under round-to-nearest.
    let x = point.x + 0.0;
    let y = point.y + 0.0;

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_ROOT_POINT);
    hasher.update(x.to_bits().to_le_bytes());
    hasher.update(y.to_bits().to_le_bytes());
    let digest = hasher.finalize();

    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(out)
}

/// Lowercase hex rendering of a root hash, for logs and reports.
#[must_use]
pub fn root_hash_hex(hash: u64) -> String {
    hex::encode(hash.to_be_bytes())
}
