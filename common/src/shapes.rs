use crate::coord::Coord;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Axis-aligned rectangle stored as min/max corners. `min_y` is the top edge.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect<T: Coord> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T: Coord> Rect<T> {
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_point(x: T, y: T) -> Self {
        Self::new(x, y, x, y)
    }

    #[inline(always)]
    pub fn from_array(fields: [T; 4]) -> Self {
        Self::new(fields[0], fields[1], fields[2], fields[3])
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Saturates for integer rectangles wider than the type can represent.
    pub fn width(&self) -> T {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> T {
        self.max_y.saturating_sub(self.min_y)
    }

    /// False for inverted extents and for NaN coordinates.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub fn is_point(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    /// Closed overlap test: rectangles sharing only an edge or a corner
    /// intersect.
    #[inline(always)]
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        other.min_x <= self.max_x
            && other.max_x >= self.min_x
            && other.min_y <= self.max_y
            && other.max_y >= self.min_y
    }

    pub fn contains_point(&self, x: T, y: T) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn contains_rect(&self, other: &Rect<T>) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn expand_to_include(&mut self, other: &Rect<T>) {
        if other.min_x < self.min_x {
            self.min_x = other.min_x;
        }
        if other.min_y < self.min_y {
            self.min_y = other.min_y;
        }
        if other.max_x > self.max_x {
            self.max_x = other.max_x;
        }
        if other.max_y > self.max_y {
            self.max_y = other.max_y;
        }
    }
}

impl<T: Coord + SampleUniform> Rect<T> {
    /// Random rectangle whose min corner lies inside `bounds` and whose sides
    /// are at most `max_size`, clipped to `bounds`.
    ///
    /// Panics if `bounds` is inverted or `max_size` is negative.
    pub fn random_inside<R: Rng>(bounds: &Rect<T>, max_size: T, rng: &mut R) -> Self {
        let min_x = rng.gen_range(bounds.min_x..=bounds.max_x);
        let min_y = rng.gen_range(bounds.min_y..=bounds.max_y);
        let mut max_x = min_x.saturating_add(rng.gen_range(T::ZERO..=max_size));
        let mut max_y = min_y.saturating_add(rng.gen_range(T::ZERO..=max_size));
        if max_x > bounds.max_x {
            max_x = bounds.max_x;
        }
        if max_y > bounds.max_y {
            max_y = bounds.max_y;
        }
        Self::new(min_x, min_y, max_x, max_y)
    }
}
