//! Parametric curves for the curve-renderer demo.
//!
//! Each curve is a total function from a parameter to a point; the client
//! samples it into a line strip and never touches the math.

use std::f32::consts::TAU;

use glam::{Vec3, vec3};

/// A parametric curve with a closed-form position for every parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Circle of the given radius in the XZ plane.
    Circle { radius: f32 },
    /// Helix around the Y axis, rising `pitch` units per turn.
    Helix { radius: f32, pitch: f32, turns: f32 },
    /// Planar Lissajous figure with frequency ratio `a : b`.
    Lissajous { a: f32, b: f32, delta: f32, scale: f32 },
    /// (p, q) torus knot winding around a torus of the given radii.
    TorusKnot { p: f32, q: f32, radius: f32, tube: f32 },
}

impl Curve {
    /// End of the parameter domain; every curve starts at `t = 0`.
    pub fn domain_end(&self) -> f32 {
        match *self {
            Curve::Helix { turns, .. } => TAU * turns,
            _ => TAU,
        }
    }

    /// Position on the curve at parameter `t`.
    pub fn eval(&self, t: f32) -> Vec3 {
        match *self {
            Curve::Circle { radius } => vec3(radius * t.cos(), 0.0, radius * t.sin()),
            Curve::Helix { radius, pitch, .. } => {
                vec3(radius * t.cos(), pitch * t / TAU, radius * t.sin())
            }
            Curve::Lissajous { a, b, delta, scale } => {
                vec3(scale * (a * t + delta).sin(), scale * (b * t).sin(), 0.0)
            }
            Curve::TorusKnot { p, q, radius, tube } => {
                let r = radius + tube * (q * t).cos();
                vec3(r * (p * t).cos(), tube * (q * t).sin(), r * (p * t).sin())
            }
        }
    }

    /// Samples `segments + 1` evenly spaced points over the domain.
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        let end = self.domain_end();
        (0..=segments)
            .map(|i| self.eval(end * i as f32 / segments as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn circle_known_points() {
        let circle = Curve::Circle { radius: 2.0 };
        assert!(close(circle.eval(0.0), vec3(2.0, 0.0, 0.0)));
        assert!(close(circle.eval(TAU / 4.0), vec3(0.0, 0.0, 2.0)));
        assert!(close(circle.eval(TAU / 2.0), vec3(-2.0, 0.0, 0.0)));
    }

    #[test]
    fn helix_rises_monotonically() {
        let helix = Curve::Helix {
            radius: 1.0,
            pitch: 0.5,
            turns: 4.0,
        };
        let points = helix.sample(256);
        assert_eq!(points.len(), 257);
        for pair in points.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
        assert!(close(points[0], vec3(1.0, 0.0, 0.0)));
        assert!((points.last().unwrap().y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn lissajous_stays_within_scale() {
        let curve = Curve::Lissajous {
            a: 3.0,
            b: 2.0,
            delta: TAU / 4.0,
            scale: 1.5,
        };
        for point in curve.sample(512) {
            assert!(point.x.abs() <= 1.5 + 1e-4);
            assert!(point.y.abs() <= 1.5 + 1e-4);
            assert_eq!(point.z, 0.0);
        }
    }

    #[test]
    fn torus_knot_closes_for_integer_windings() {
        let knot = Curve::TorusKnot {
            p: 2.0,
            q: 3.0,
            radius: 2.0,
            tube: 0.6,
        };
        assert!(close(knot.eval(0.0), knot.eval(TAU)));
    }

    #[test]
    fn sample_guards_degenerate_segment_count() {
        let circle = Curve::Circle { radius: 1.0 };
        assert_eq!(circle.sample(0).len(), 2);
    }
}
