//! Interval endpoints and the unbounded sentinels.
//!
//! Pieces that extend without bound carry `f64::MAX` / `f64::MIN` as
//! endpoints rather than IEEE infinities: the sentinels survive the
//! arithmetic that endpoint remapping performs, where an infinity would
//! turn into NaN the moment it met a zero or an opposing infinity.

use piecewise_poly::AffineMap;

/// Upper sentinel standing in for +∞.
pub const INF: f64 = f64::MAX;

/// Lower sentinel standing in for −∞.
pub const NEG_INF: f64 = f64::MIN;

/// Whether an endpoint is at or beyond the upper sentinel.
#[must_use]
pub fn is_upper_sentinel(x: f64) -> bool {
    x >= INF
}

/// Whether an endpoint is at or beyond the lower sentinel.
#[must_use]
pub fn is_lower_sentinel(x: f64) -> bool {
    x <= NEG_INF
}

/// Carries an endpoint through a domain transform, keeping sentinels
/// pinned at the appropriate end instead of pushing them through float
/// arithmetic. A direction-reversing transform swaps which end a
/// sentinel pins to; the caller reorders finite endpoints itself.
#[must_use]
pub fn remap_endpoint(x: f64, map: &AffineMap) -> f64 {
    if is_upper_sentinel(x) {
        if map.is_increasing() {
            INF
        } else {
            NEG_INF
        }
    } else if is_lower_sentinel(x) {
        if map.is_increasing() {
            NEG_INF
        } else {
            INF
        }
    } else {
        map.evaluate(x)
    }
}
