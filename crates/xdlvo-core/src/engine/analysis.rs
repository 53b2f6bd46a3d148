use super::profile::EnergyProfile;
use crate::core::numerics::{DEFAULT_EPSILON, almost_equal, almost_ge, almost_le};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Barrier {
    pub position: f64,
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MinimumKind {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Minimum {
    pub position: f64,
    pub energy: f64,
    pub kind: MinimumKind,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileAnalysis {
    pub barrier: Option<Barrier>,
    pub primary_minimum: Option<Minimum>,
    pub secondary_minimum: Option<Minimum>,
    /// All minima ordered by position.
    pub minima: Vec<Minimum>,
    /// F = -dU/dh, index-aligned with the profile.
    pub force: Vec<f64>,
    pub zero_crossings: Vec<f64>,
}

/// Highest interior point that is strictly above both neighbours.
///
/// The end samples are never candidates, so monotonic profiles have no barrier.
pub fn find_barrier(h: &[f64], u: &[f64]) -> Option<Barrier> {
    let n = u.len().min(h.len());
    let mut best: Option<Barrier> = None;
    for i in 1..n.saturating_sub(1) {
        let is_peak = u[i] > u[i - 1] && u[i] > u[i + 1];
        if is_peak && best.is_none_or(|b| u[i] > b.energy) {
            best = Some(Barrier {
                position: h[i],
                energy: u[i],
            });
        }
    }
    best
}

/// Local minima of `u`, sorted by position.
///
/// The first sample counts as a minimum when it lies strictly below the second (adhesion at
/// contact). After sorting the first minimum is primary and every later one secondary.
pub fn find_minima(h: &[f64], u: &[f64]) -> Vec<Minimum> {
    let n = u.len().min(h.len());
    let mut minima = Vec::new();

    if n >= 2 && u[0] < u[1] {
        minima.push(Minimum {
            position: h[0],
            energy: u[0],
            kind: MinimumKind::Primary,
        });
    }
    for i in 1..n.saturating_sub(1) {
        if u[i] < u[i - 1] && u[i] < u[i + 1] {
            minima.push(Minimum {
                position: h[i],
                energy: u[i],
                kind: MinimumKind::Secondary,
            });
        }
    }

    minima.sort_by(|a, b| a.position.total_cmp(&b.position));
    for (i, m) in minima.iter_mut().enumerate() {
        m.kind = if i == 0 {
            MinimumKind::Primary
        } else {
            MinimumKind::Secondary
        };
    }
    minima
}

/// F = -dU/dh by finite differences: forward at the first sample, backward at the last,
/// central in between. Fewer than two samples give zero force.
pub fn calculate_force(h: &[f64], u: &[f64]) -> Vec<f64> {
    let n = u.len().min(h.len());
    if n < 2 {
        return vec![0.0; n];
    }

    (0..n)
        .map(|i| {
            let (lo, hi) = match i {
                0 => (0, 1),
                i if i == n - 1 => (n - 2, n - 1),
                i => (i - 1, i + 1),
            };
            -(u[hi] - u[lo]) / (h[hi] - h[lo])
        })
        .collect()
}

/// Distances at which `u` changes sign, linearly interpolated between bracketing samples.
///
/// Samples within [`DEFAULT_EPSILON`] of zero count as zero. A sample sitting on zero would be
/// reported by both adjacent intervals, so repeated positions are collapsed.
pub fn find_zero_crossings(h: &[f64], u: &[f64]) -> Vec<f64> {
    let n = u.len().min(h.len());
    let mut zeros: Vec<f64> = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let (u1, u2) = (u[i], u[i + 1]);
        let crosses = (almost_le(u1, 0.0, DEFAULT_EPSILON) && almost_ge(u2, 0.0, DEFAULT_EPSILON))
            || (almost_ge(u1, 0.0, DEFAULT_EPSILON) && almost_le(u2, 0.0, DEFAULT_EPSILON));
        if !crosses {
            continue;
        }

        let position = if almost_equal(u1, u2, DEFAULT_EPSILON) {
            h[i]
        } else {
            h[i] - u1 / (u2 - u1) * (h[i + 1] - h[i])
        };
        if zeros
            .last()
            .is_none_or(|&last| !almost_equal(last, position, DEFAULT_EPSILON))
        {
            zeros.push(position);
        }
    }
    zeros
}

/// Runs every analysis over the total-energy series of `profile`.
pub fn analyze_profile(profile: &EnergyProfile) -> ProfileAnalysis {
    let (h, u) = (&profile.h, &profile.total);
    let minima = find_minima(h, u);
    let primary_minimum = minima
        .iter()
        .find(|m| m.kind == MinimumKind::Primary)
        .copied();
    let secondary_minimum = minima
        .iter()
        .find(|m| m.kind == MinimumKind::Secondary)
        .copied();

    ProfileAnalysis {
        barrier: find_barrier(h, u),
        primary_minimum,
        secondary_minimum,
        minima,
        force: calculate_force(h, u),
        zero_crossings: find_zero_crossings(h, u),
    }
}
