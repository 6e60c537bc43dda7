use std::borrow::Borrow;
use std::fmt;

/// String key naming an item definition in the registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Grid cell coordinate. The origin is the top-left cell; `y` grows downward.
///
/// Coordinates are signed so that candidate anchors left of or above the grid
/// can be expressed (and rejected) instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for CellPos {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle of cells, anchored at its top-left corner.
///
/// Intervals are half-open: a rectangle at `x` with width `w` covers columns
/// `x..x + w`. Arithmetic is widened to `i64` so extreme anchors cannot
/// overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRect {
    pub origin: CellPos,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn new(origin: CellPos, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    #[inline]
    fn left(&self) -> i64 {
        i64::from(self.origin.x)
    }

    #[inline]
    fn top(&self) -> i64 {
        i64::from(self.origin.y)
    }

    #[inline]
    fn right(&self) -> i64 {
        self.left() + i64::from(self.width)
    }

    #[inline]
    fn bottom(&self) -> i64 {
        self.top() + i64::from(self.height)
    }

    /// Returns true if both rectangles share at least one cell.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Returns true if the cell lies inside this rectangle.
    pub fn contains(&self, cell: CellPos) -> bool {
        let (cx, cy) = (i64::from(cell.x), i64::from(cell.y));
        cx >= self.left() && cx < self.right() && cy >= self.top() && cy < self.bottom()
    }

    /// Returns true if the rectangle lies entirely inside a `width × height`
    /// grid anchored at the origin.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left() >= 0
            && self.top() >= 0
            && self.right() <= i64::from(width)
            && self.bottom() <= i64::from(height)
    }
}
