/// A closed range of ray parameters `[min, max]`.
///
/// Intersection routines accept a hit only when it lies strictly inside the
/// range (see [`Interval::surrounds`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    ///
    /// NaN is never surrounded.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// The same interval with its upper end moved to `max`.
    ///
    /// Used to shrink the search range while scanning for the closest hit.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}
