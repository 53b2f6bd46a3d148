pub const DEFAULT_EPSILON: f64 = 1e-10;

const SERIES_THRESHOLD: f64 = 1e-10;
const ASYMPTOTIC_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperbolics {
    pub coth: f64,
    pub csch: f64,
}

/// Evaluates `coth(x)` and `csch(x)` together.
///
/// Near zero the truncated Laurent series is used, beyond `|x| > 20` the asymptotic limits,
/// and the direct definitions in between. `x == 0` yields infinity for both.
#[inline]
pub fn hyperbolics(x: f64) -> Hyperbolics {
    if x.abs() < SERIES_THRESHOLD {
        if x == 0.0 {
            return Hyperbolics {
                coth: f64::INFINITY,
                csch: f64::INFINITY,
            };
        }
        return Hyperbolics {
            coth: 1.0 / x + x / 3.0,
            csch: 1.0 / x - x / 6.0,
        };
    }

    if x.abs() > ASYMPTOTIC_THRESHOLD {
        return Hyperbolics {
            coth: x.signum(),
            csch: 0.0,
        };
    }

    Hyperbolics {
        coth: 1.0 / x.tanh(),
        csch: 1.0 / x.sinh(),
    }
}

/// Index of the sample in an ascending sequence closest to `target`.
///
/// Targets outside the sampled range clamp to the first/last index. Between two bracketing
/// samples the lower index wins only when strictly closer, so an exact midpoint goes right.
pub fn find_closest_index(sorted: &[f64], target: f64) -> Option<usize> {
    let last = sorted.len().checked_sub(1)?;
    if target <= sorted[0] {
        return Some(0);
    }
    if target >= sorted[last] {
        return Some(last);
    }

    let (mut lo, mut hi) = (0, last);
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if sorted[mid] == target {
            return Some(mid);
        }
        if sorted[mid] < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if (sorted[lo] - target).abs() < (sorted[hi] - target).abs() {
        Some(lo)
    } else {
        Some(hi)
    }
}

#[inline]
pub fn almost_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[inline]
pub fn almost_le(a: f64, b: f64, eps: f64) -> bool {
    a < b || almost_equal(a, b, eps)
}

#[inline]
pub fn almost_ge(a: f64, b: f64, eps: f64) -> bool {
    a > b || almost_equal(a, b, eps)
}

/// Value at the sample nearest to `target`, provided that sample lies within `tolerance`.
pub fn energy_at_distance(h: &[f64], values: &[f64], target: f64, tolerance: f64) -> Option<f64> {
    let idx = find_closest_index(h, target)?;
    if (h[idx] - target).abs() < tolerance {
        values.get(idx).copied()
    } else {
        None
    }
}

/// Piecewise-linear interpolation of `values` sampled on the ascending grid `h`, clamped to
/// the end samples outside the grid.
pub fn interpolate_at(h: &[f64], values: &[f64], distance: f64) -> Option<f64> {
    if h.is_empty() || h.len() != values.len() {
        return None;
    }
    let last = h.len() - 1;
    if distance <= h[0] {
        return Some(values[0]);
    }
    if distance >= h[last] {
        return Some(values[last]);
    }

    // h[0] < distance < h[last], so 1 <= hi <= last.
    let hi = h.partition_point(|&x| x <= distance);
    let lo = hi - 1;
    let t = (distance - h[lo]) / (h[hi] - h[lo]);
    Some(values[lo] + t * (values[hi] - values[lo]))
}
