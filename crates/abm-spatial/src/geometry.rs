//! Pure grid geometry: bounds checks and Moore neighborhoods.
//!
//! Every neighbor search in this crate starts from [`moore_neighborhood`].
//! Candidates are generated from a fixed offset table and then filtered by
//! [`valid`], so an interior cell yields 8 (2D) or 26 (3D) neighbors and
//! cells on an edge, face or corner yield fewer.

use abm_core::SimRng;

use crate::{Coord, Extent};

/// 2D offsets in generation order.
const OFFSETS_2D: [(i64, i64); 8] = [
    (1, -1), (1, 0), (1, 1),
    (0, -1),         (0, 1),
    (-1, -1), (-1, 0), (-1, 1),
];

/// 3D offsets in generation order: x outermost, then y, then z.
const OFFSETS_3D: [(i64, i64, i64); 26] = [
    (1, 1, 1),   (1, 1, -1),   (1, 1, 0),
    (1, -1, 1),  (1, -1, -1),  (1, -1, 0),
    (1, 0, 1),   (1, 0, -1),   (1, 0, 0),
    (0, 1, 1),   (0, 1, -1),   (0, 1, 0),
    (0, -1, 1),  (0, -1, -1),  (0, -1, 0),
    (0, 0, 1),   (0, 0, -1),
    (-1, 1, 1),  (-1, 1, -1),  (-1, 1, 0),
    (-1, -1, 1), (-1, -1, -1), (-1, -1, 0),
    (-1, 0, 1),  (-1, 0, -1),  (-1, 0, 0),
];

/// `true` iff every component of `coord` lies in `[0, size)` on its axis.
///
/// A coordinate whose dimensionality differs from the extent's is never
/// valid.
#[inline]
pub fn valid(coord: Coord, extent: Extent) -> bool {
    #[inline]
    fn within(c: i64, size: u32) -> bool {
        c >= 0 && c < size as i64
    }

    match (coord, extent) {
        (Coord::Xy(x, y), Extent::Plane { xsize, ysize }) => {
            within(x, xsize) && within(y, ysize)
        }
        (Coord::Xyz(x, y, z), Extent::Volume { xsize, ysize, zsize }) => {
            within(x, xsize) && within(y, ysize) && within(z, zsize)
        }
        _ => false,
    }
}

/// All in-bounds cells adjacent to `coord` (diagonals included, `coord`
/// itself excluded).
///
/// With `rng = None` the result follows the fixed offset-table order.  With
/// `Some(rng)` the result is a uniformly random permutation, which lets
/// callers break ties between equally good neighbors without positional
/// bias.
///
/// `coord` itself need not be valid: an out-of-bounds cell simply has fewer
/// (possibly zero) in-bounds neighbors.
pub fn moore_neighborhood(coord: Coord, extent: Extent, rng: Option<&mut SimRng>) -> Vec<Coord> {
    let mut neigh: Vec<Coord> = match coord {
        Coord::Xy(x, y) => OFFSETS_2D
            .iter()
            .filter_map(|&(dx, dy)| Some(Coord::Xy(x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&c| valid(c, extent))
            .collect(),
        Coord::Xyz(x, y, z) => OFFSETS_3D
            .iter()
            .filter_map(|&(dx, dy, dz)| {
                Some(Coord::Xyz(x.checked_add(dx)?, y.checked_add(dy)?, z.checked_add(dz)?))
            })
            .filter(|&c| valid(c, extent))
            .collect(),
    };

    if let Some(rng) = rng {
        rng.shuffle(&mut neigh);
    }
    neigh
}

/// Scan `candidates` in order and return the first one whose key reaches
/// the running extremum.
///
/// The running value starts at the first candidate's key; a later candidate
/// only wins if `better(key, best)` holds strictly, so ties keep the earlier
/// candidate.  Returns `None` for an empty slice.
pub(crate) fn first_extremum<K, F, B>(candidates: &[Coord], mut key: F, better: B) -> Option<Coord>
where
    K: PartialOrd + Copy,
    F: FnMut(Coord) -> K,
    B: Fn(K, K) -> bool,
{
    let (&first, rest) = candidates.split_first()?;
    let mut best = (first, key(first));
    for &c in rest {
        let k = key(c);
        if better(k, best.1) {
            best = (c, k);
        }
    }
    Some(best.0)
}
