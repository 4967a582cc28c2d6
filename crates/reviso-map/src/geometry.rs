use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (other - *self).length()
    }

    /// The vector rotated 90 degrees counter-clockwise.
    pub fn perpendicular(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Unit-length vector in the same direction, or zero for a zero vector.
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// A rectangle defined by min and max corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// An empty rectangle
    pub const NOTHING: Self = Self {
        min: Vec2 { x: 0.0, y: 0.0 },
        max: Vec2 { x: 0.0, y: 0.0 },
    };

    /// Create a new rectangle from min and max corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a new rectangle from position (top-left) and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: Vec2::new(pos.x + size.x, pos.y + size.y),
        }
    }

    /// Create a new rectangle centered on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.width() * 0.5,
            self.min.y + self.height() * 0.5,
        )
    }

    /// Check if the rectangle contains a point
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Return a new rectangle expanded by `amount` on all sides
    pub fn expand(&self, amount: f32) -> Rect {
        self.expand2(Vec2::new(amount, amount))
    }

    /// Return a new rectangle expanded by `amount.x` horizontally and
    /// `amount.y` vertically
    pub fn expand2(&self, amount: Vec2) -> Rect {
        Rect {
            min: self.min - amount,
            max: self.max + amount,
        }
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// A cubic bezier curve segment defined by four control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

impl CubicBezier {
    /// Smooth S-curve between two anchors with horizontal tangents at both
    /// ends: control points sit at the curve's horizontal midpoint, at the
    /// start and end heights respectively. Used for tree-mode edges.
    pub fn s_curve(start: Vec2, end: Vec2) -> Self {
        let mid_x = (start.x + end.x) * 0.5;
        Self {
            start,
            control1: Vec2::new(mid_x, start.y),
            control2: Vec2::new(mid_x, end.y),
            end,
        }
    }

    /// Sample the curve at parameter t [0, 1]
    pub fn sample(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = self.start.x * mt3
            + 3.0 * self.control1.x * mt2 * t
            + 3.0 * self.control2.x * mt * t2
            + self.end.x * t3;
        let y = self.start.y * mt3
            + 3.0 * self.control1.y * mt2 * t
            + 3.0 * self.control2.y * mt * t2
            + self.end.y * t3;

        Vec2::new(x, y)
    }

    /// Minimum distance from a point to this curve, via uniform sampling.
    /// `num_samples` controls accuracy (higher = more precise but slower).
    pub fn point_distance(&self, point: Vec2, num_samples: usize) -> f32 {
        let samples = num_samples.max(2);
        let mut min_dist_sq = f32::INFINITY;

        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let p = self.sample(t);
            let d = p - point;
            let dist_sq = d.x * d.x + d.y * d.y;
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
            }
        }

        min_dist_sq.sqrt()
    }
}

/// A quadratic bezier curve segment with a single control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadraticBezier {
    /// Gentle arc between two anchors: the control point is the segment
    /// midpoint pushed perpendicular to the chord by
    /// `chord_length * offset_factor / 2`. Used for radial-mode edges with
    /// an offset factor of 0.2.
    pub fn arc(start: Vec2, end: Vec2, offset_factor: f32) -> Self {
        let chord = end - start;
        let mid = start + chord * 0.5;
        let offset = chord.perpendicular().normalized() * (chord.length() * offset_factor * 0.5);
        Self {
            start,
            control: mid + offset,
            end,
        }
    }

    /// Sample the curve at parameter t [0, 1]
    pub fn sample(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        let a = mt * mt;
        let b = 2.0 * mt * t;
        let c = t * t;

        Vec2::new(
            self.start.x * a + self.control.x * b + self.end.x * c,
            self.start.y * a + self.control.y * b + self.end.y * c,
        )
    }

    /// Minimum distance from a point to this curve, via uniform sampling.
    pub fn point_distance(&self, point: Vec2, num_samples: usize) -> f32 {
        let samples = num_samples.max(2);
        let mut min_dist_sq = f32::INFINITY;

        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let p = self.sample(t);
            let d = p - point;
            let dist_sq = d.x * d.x + d.y * d.y;
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
            }
        }

        min_dist_sq.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_basics() {
        let rect = Rect::from_pos_size(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 45.0));
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(110.0, 70.0)));
        assert!(!rect.contains(Vec2::new(9.9, 20.0)));
    }

    #[test]
    fn test_rect_union_and_expand() {
        let a = Rect::from_min_max(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::from_min_max(Vec2::new(-5.0, 2.0), Vec2::new(3.0, 20.0));
        let u = a.union(b);
        assert_eq!(u.min, Vec2::new(-5.0, 0.0));
        assert_eq!(u.max, Vec2::new(10.0, 20.0));

        let e = a.expand2(Vec2::new(2.0, 3.0));
        assert_eq!(e.min, Vec2::new(-2.0, -3.0));
        assert_eq!(e.max, Vec2::new(12.0, 13.0));
    }

    #[test]
    fn test_s_curve_endpoints_and_tangents() {
        let curve = CubicBezier::s_curve(Vec2::new(0.0, 0.0), Vec2::new(100.0, 40.0));
        assert_eq!(curve.sample(0.0), Vec2::new(0.0, 0.0));
        assert_eq!(curve.sample(1.0), Vec2::new(100.0, 40.0));
        // Horizontal tangents: the control points keep the endpoint heights.
        assert_eq!(curve.control1, Vec2::new(50.0, 0.0));
        assert_eq!(curve.control2, Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_arc_control_offset() {
        let curve = QuadraticBezier::arc(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 0.2);
        // Chord length 100, factor 0.2 => perpendicular offset of 10 at the midpoint.
        assert!((curve.control.x - 50.0).abs() < 1e-4);
        assert!((curve.control.y.abs() - 10.0).abs() < 1e-4);
        assert_eq!(curve.sample(0.0), curve.start);
        assert_eq!(curve.sample(1.0), curve.end);
    }

    #[test]
    fn test_arc_degenerate_chord() {
        let p = Vec2::new(5.0, 5.0);
        let curve = QuadraticBezier::arc(p, p, 0.2);
        assert_eq!(curve.control, p);
    }

    #[test]
    fn test_point_distance_straightish_curve() {
        let curve = CubicBezier {
            start: Vec2::new(0.0, 0.0),
            control1: Vec2::new(33.0, 0.0),
            control2: Vec2::new(66.0, 0.0),
            end: Vec2::new(100.0, 0.0),
        };
        let dist = curve.point_distance(Vec2::new(50.0, 4.0), 48);
        assert!((dist - 4.0).abs() < 0.5);
    }
}
