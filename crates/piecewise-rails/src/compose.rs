//! Composition of piecewise functions.
//!
//! Composition is linear in its outer argument but not in its inner one:
//! Σfᵢ ∘ g = Σ(fᵢ ∘ g), while f ∘ Σgⱼ has no such expansion. The inner
//! function is therefore canonicalized to a [`Partition`] first, so each
//! inner cell carries the full local value of g, and the outer pieces
//! distribute over the cells.

use piecewise_poly::AlgebraError;

use crate::bound::{self, INF, NEG_INF};
use crate::partition::Partition;
use crate::piece::Piece;
use crate::yard::Yard;

/// Composes two piecewise functions, `outer ∘ inner`.
///
/// # Errors
///
/// Propagates [`AlgebraError::LaurentComposition`] when any outer piece
/// carries negative exponents.
pub fn compose(outer: &Yard, inner: &Yard) -> Result<Yard, AlgebraError> {
    let cells = Partition::from_yard(inner);
    let mut pieces = Vec::new();
    for f in outer.pieces() {
        for (cell, content) in cells.couplers().windows(2).zip(cells.contents()) {
            let g = Piece::new(cell[0], cell[1], content.clone());
            pieces.extend(compose_pieces(f, &g)?);
        }
    }
    Ok(Yard::new(pieces))
}

/// Composes two partitions, re-canonicalizing the result.
///
/// # Errors
///
/// Propagates [`AlgebraError::LaurentComposition`] from the cell contents.
pub fn compose_partitions(
    outer: &Partition,
    inner: &Partition,
) -> Result<Partition, AlgebraError> {
    Ok(Partition::from_yard(&compose(&outer.yard(), &inner.yard())?))
}

/// Composes one outer piece with one inner piece.
///
/// `f ∘ g` is nonzero only where `g(x)` lands inside f's window, so the
/// inner window is cut at every preimage of f's endpoints under g. On
/// each resulting sub-interval g either stays inside the window or stays
/// outside, decided by a probe at the midpoint.
pub fn compose_pieces(f: &Piece, g: &Piece) -> Result<Vec<Piece>, AlgebraError> {
    let mut marks = vec![g.lo, g.hi];
    for target in [f.lo, f.hi] {
        if bound::is_lower_sentinel(target) || bound::is_upper_sentinel(target) {
            continue;
        }
        for r in g.content.solutions(target) {
            if g.lo < r && r < g.hi {
                marks.push(r);
            }
        }
    }
    marks.sort_by(f64::total_cmp);
    marks.dedup();

    let composed = f.content.compose(&g.content)?;
    let mut out = Vec::new();
    for w in marks.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        if lo >= hi {
            continue;
        }
        // halved before summing so sentinel endpoints cannot overflow
        let mid = lo * 0.5 + hi * 0.5;
        if window_contains(f, g.content.evaluate(mid)) {
            out.push(Piece::new(lo.max(g.lo), hi.min(g.hi), composed.clone()));
        }
    }
    Ok(out)
}

/// Window membership that tolerates probes taken near the sentinels,
/// where the inner polynomial may overflow to ±∞.
fn window_contains(f: &Piece, value: f64) -> bool {
    if value.is_nan() {
        false
    } else if value >= INF {
        bound::is_upper_sentinel(f.hi)
    } else if value <= NEG_INF {
        bound::is_lower_sentinel(f.lo)
    } else {
        f.contains(value)
    }
}
