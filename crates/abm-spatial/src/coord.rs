//! Integer grid coordinates and grid extents.

use std::fmt;

/// A cell address in a 2D or 3D grid.
///
/// Components are signed so that neighborhood arithmetic can step below zero
/// before bounds filtering.  Equality and hashing are structural.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coord {
    Xy(i64, i64),
    Xyz(i64, i64, i64),
}

impl Coord {
    #[inline]
    pub fn xy(x: i64, y: i64) -> Self {
        Coord::Xy(x, y)
    }

    #[inline]
    pub fn xyz(x: i64, y: i64, z: i64) -> Self {
        Coord::Xyz(x, y, z)
    }

    /// Number of axes (2 or 3).
    #[inline]
    pub fn dims(self) -> usize {
        match self {
            Coord::Xy(..) => 2,
            Coord::Xyz(..) => 3,
        }
    }

    #[inline]
    pub fn x(self) -> i64 {
        match self {
            Coord::Xy(x, _) | Coord::Xyz(x, _, _) => x,
        }
    }

    #[inline]
    pub fn y(self) -> i64 {
        match self {
            Coord::Xy(_, y) | Coord::Xyz(_, y, _) => y,
        }
    }

    /// The z component, or `None` for a 2D coordinate.
    #[inline]
    pub fn z(self) -> Option<i64> {
        match self {
            Coord::Xy(..) => None,
            Coord::Xyz(_, _, z) => Some(z),
        }
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord::Xy(x, y)
    }
}

impl From<(i64, i64, i64)> for Coord {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Coord::Xyz(x, y, z)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Xy(x, y) => write!(f, "({x}, {y})"),
            Coord::Xyz(x, y, z) => write!(f, "({x}, {y}, {z})"),
        }
    }
}

/// The bounds of a grid: each size is an exclusive upper bound, the lower
/// bound is always zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    Plane { xsize: u32, ysize: u32 },
    Volume { xsize: u32, ysize: u32, zsize: u32 },
}

impl Extent {
    #[inline]
    pub fn plane(xsize: u32, ysize: u32) -> Self {
        Extent::Plane { xsize, ysize }
    }

    #[inline]
    pub fn volume(xsize: u32, ysize: u32, zsize: u32) -> Self {
        Extent::Volume { xsize, ysize, zsize }
    }

    /// Number of axes (2 or 3).
    #[inline]
    pub fn dims(self) -> usize {
        match self {
            Extent::Plane { .. } => 2,
            Extent::Volume { .. } => 3,
        }
    }

    #[inline]
    pub fn xsize(self) -> u32 {
        match self {
            Extent::Plane { xsize, .. } | Extent::Volume { xsize, .. } => xsize,
        }
    }

    #[inline]
    pub fn ysize(self) -> u32 {
        match self {
            Extent::Plane { ysize, .. } | Extent::Volume { ysize, .. } => ysize,
        }
    }

    /// The z size, or `None` for a planar extent.
    #[inline]
    pub fn zsize(self) -> Option<u32> {
        match self {
            Extent::Plane { .. } => None,
            Extent::Volume { zsize, .. } => Some(zsize),
        }
    }

    /// Total number of addressable cells.
    pub fn cell_count(self) -> u64 {
        let plane = self.xsize() as u64 * self.ysize() as u64;
        plane * self.zsize().map_or(1, u64::from)
    }

    /// Every valid coordinate in x-major order (x outermost).
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let (xs, ys) = (self.xsize() as i64, self.ysize() as i64);
        let zs = self.zsize().map(i64::from);
        (0..xs).flat_map(move |x| {
            (0..ys).flat_map(move |y| -> Box<dyn Iterator<Item = Coord>> {
                match zs {
                    None => Box::new(std::iter::once(Coord::Xy(x, y))),
                    Some(zs) => Box::new((0..zs).map(move |z| Coord::Xyz(x, y, z))),
                }
            })
        })
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Plane { xsize, ysize } => write!(f, "{xsize}x{ysize}"),
            Extent::Volume { xsize, ysize, zsize } => write!(f, "{xsize}x{ysize}x{zsize}"),
        }
    }
}
