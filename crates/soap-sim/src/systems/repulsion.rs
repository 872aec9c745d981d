//! Force accumulation: entity-entity and soap repulsion.
//!
//! Both sources share one falloff rule: inside a cutoff radius the push
//! scales with penetration depth over distance, directed along the
//! separation vector. Outside the radius, or at exactly zero distance,
//! a pair contributes nothing.

use soap_core::config::SimConfig;
use soap_core::types::SoapPoint;

/// Accumulate entity-entity repulsion into `forces`.
///
/// Exhaustive O(n²) scan: every entity against every other, reading only
/// the previous tick's published positions. Coincident pairs are skipped so
/// the direction term never divides by zero; perfectly overlapping
/// particles stay overlapped.
pub fn entities(positions: &[f64], config: &SimConfig, forces: &mut [f64]) {
    let count = positions.len() / 2;
    let min_dist = config.entity_repulsion_radius();

    for i in 0..count {
        let x = positions[2 * i];
        let y = positions[2 * i + 1];
        let mut fx = 0.0;
        let mut fy = 0.0;

        for j in 0..count {
            if j == i {
                continue;
            }
            let dist_x = x - positions[2 * j];
            let dist_y = y - positions[2 * j + 1];
            let distance = (dist_x * dist_x + dist_y * dist_y).sqrt();
            if distance < min_dist && distance > 0.0 {
                let overlap = min_dist - distance;
                fx += (overlap / distance) * dist_x * config.repulsion_strength;
                fy += (overlap / distance) * dist_y * config.repulsion_strength;
            }
        }

        forces[2 * i] += fx;
        forces[2 * i + 1] += fy;
    }
}

/// Accumulate soap repulsion into `forces`.
///
/// Same falloff as entity repulsion, with the larger canvas-tracking radius.
pub fn soap(positions: &[f64], soap_points: &[SoapPoint], config: &SimConfig, forces: &mut [f64]) {
    if soap_points.is_empty() {
        return;
    }

    let count = positions.len() / 2;
    let min_dist = config.soap_repulsion_radius();

    for i in 0..count {
        let x = positions[2 * i];
        let y = positions[2 * i + 1];
        let mut fx = 0.0;
        let mut fy = 0.0;

        for point in soap_points {
            let dist_x = x - point.x;
            let dist_y = y - point.y;
            let distance = (dist_x * dist_x + dist_y * dist_y).sqrt();
            if distance < min_dist && distance > 0.0 {
                let overlap = min_dist - distance;
                fx += (overlap / distance) * dist_x * config.repulsion_strength;
                fy += (overlap / distance) * dist_y * config.repulsion_strength;
            }
        }

        forces[2 * i] += fx;
        forces[2 * i + 1] += fy;
    }
}
