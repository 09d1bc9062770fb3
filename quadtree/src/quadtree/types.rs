use super::*;

/// Identity slot value of an item that is not stored in any tree.
pub const NOT_INSERTED: i32 = -1;

/// An item that can be stored in a [`QuadTree`](super::QuadTree).
///
/// The tree owns the identity slot while the item is a member: it writes the
/// element index on insert and resets it to [`NOT_INSERTED`] on removal.
/// Implementors should start items out at `NOT_INSERTED` and never write the
/// slot themselves.
pub trait TreeItem {
    fn tree_index(&self) -> i32;
    fn set_tree_index(&mut self, index: i32);
}

pub(crate) const NIL: i32 = -1;
pub(crate) const BRANCH: i32 = -1;
pub(crate) const ROOT: u32 = 0;

// Node record: first child (branch) or membership head (leaf), then the
// element count or BRANCH.
pub(crate) const NODE_FIRST: usize = 0;
pub(crate) const NODE_COUNT: usize = 1;
pub(crate) const EMPTY_LEAF: [i32; 2] = [NIL, 0];

// Membership record: next link, then element index.
pub(crate) const LINK_NEXT: usize = 0;

pub(crate) type NodeTable = ArenaList<i32, 2>;
pub(crate) type MembershipArena = ArenaList<i32, 2>;
pub(crate) type ElementStore<C> = ArenaList<C, 4>;

/// Centre and half size of a node cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HalfExtent<C: Coord> {
    pub(crate) x: C,
    pub(crate) y: C,
    pub(crate) w: C,
    pub(crate) h: C,
}

impl<C: Coord> HalfExtent<C> {
    #[inline(always)]
    pub(crate) fn root(width: C, height: C) -> Self {
        let w = width.half();
        let h = height.half();
        Self { x: w, y: h, w, h }
    }

    /// Quadrants are ordered top-left, top-right, bottom-left, bottom-right.
    #[inline(always)]
    pub(crate) fn child(self, quadrant: usize) -> Self {
        let w = self.w.half();
        let h = self.h.half();
        Self {
            x: if quadrant & 1 == 0 { self.x - w } else { self.x + w },
            y: if quadrant < 2 { self.y - h } else { self.y + h },
            w,
            h,
        }
    }

    #[inline(always)]
    pub(crate) fn to_rect(self) -> Rect<C> {
        Rect::new(self.x - self.w, self.y - self.h, self.x + self.w, self.y + self.h)
    }
}

/// A node index paired with the cell it covers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeData<C: Coord> {
    pub(crate) index: u32,
    pub(crate) half: HalfExtent<C>,
    pub(crate) depth: u32,
}

impl<C: Coord> NodeData<C> {
    #[inline(always)]
    pub(crate) fn child(self, first: u32, quadrant: usize) -> Self {
        Self {
            index: first + quadrant as u32,
            half: self.half.child(quadrant),
            depth: self.depth + 1,
        }
    }
}

pub(crate) type NodeStack<C> = SmallVec<[NodeData<C>; 64]>;
pub(crate) type LeafList<C> = SmallVec<[NodeData<C>; 16]>;
/// Elements waiting to be filed under a node, after that node split.
pub(crate) type RefileStack<C> = SmallVec<[(NodeData<C>, u32); 16]>;

/// Children of a branch centred at `half` that `extent` must be filed under.
///
/// Top row when `min_y <= y`, bottom row when `max_y > y`; left column when
/// `min_x <= x`, right column when `max_x > x`. A box touching the centre line
/// from above or the left is therefore also filed on that side.
#[inline(always)]
pub(crate) fn child_targets_for_extent<C: Coord>(
    half: HalfExtent<C>,
    extent: &Rect<C>,
    targets: &mut [usize; 4],
) -> usize {
    let left = extent.min_x <= half.x;
    let right = extent.max_x > half.x;
    let mut targets_len = 0usize;
    if extent.min_y <= half.y {
        if left {
            targets[targets_len] = 0;
            targets_len += 1;
        }
        if right {
            targets[targets_len] = 1;
            targets_len += 1;
        }
    }
    if extent.max_y > half.y {
        if left {
            targets[targets_len] = 2;
            targets_len += 1;
        }
        if right {
            targets[targets_len] = 3;
            targets_len += 1;
        }
    }
    targets_len
}

#[inline(always)]
pub(crate) fn validate_rect<C: Coord>(rect: &Rect<C>) -> QuadtreeResult<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(QuadtreeError::InvalidRectExtent {
            extent: format!("{:?}", rect),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(half: HalfExtent<i32>, rect: Rect<i32>) -> Vec<usize> {
        let mut out = [0usize; 4];
        let len = child_targets_for_extent(half, &rect, &mut out);
        out[..len].to_vec()
    }

    #[test]
    fn child_halves_tile_parent() {
        let root = HalfExtent::root(1000, 1000);
        assert_eq!(root.to_rect(), Rect::new(0, 0, 1000, 1000));
        assert_eq!(root.child(0).to_rect(), Rect::new(0, 0, 500, 500));
        assert_eq!(root.child(1).to_rect(), Rect::new(500, 0, 1000, 500));
        assert_eq!(root.child(2).to_rect(), Rect::new(0, 500, 500, 1000));
        assert_eq!(root.child(3).to_rect(), Rect::new(500, 500, 1000, 1000));
    }

    #[test]
    fn targets_follow_centre_lines() {
        let root = HalfExtent::root(100, 100);
        assert_eq!(targets(root, Rect::new(10, 10, 20, 20)), vec![0]);
        assert_eq!(targets(root, Rect::new(60, 10, 70, 20)), vec![1]);
        assert_eq!(targets(root, Rect::new(10, 60, 20, 70)), vec![2]);
        assert_eq!(targets(root, Rect::new(60, 60, 70, 70)), vec![3]);
        assert_eq!(targets(root, Rect::new(40, 40, 60, 60)), vec![0, 1, 2, 3]);
        assert_eq!(targets(root, Rect::new(40, 10, 60, 20)), vec![0, 1]);
    }

    #[test]
    fn targets_on_centre_line() {
        let root = HalfExtent::root(100, 100);
        // max == centre stays on the low side only.
        assert_eq!(targets(root, Rect::new(40, 40, 50, 50)), vec![0]);
        // min == centre reaches both sides.
        assert_eq!(targets(root, Rect::new(50, 50, 60, 60)), vec![0, 1, 2, 3]);
        assert_eq!(targets(root, Rect::from_point(50, 50)), vec![0]);
    }

    #[test]
    fn validate_rejects_inverted() {
        assert!(validate_rect(&Rect::new(0.0f32, 0.0, 0.0, 0.0)).is_ok());
        assert!(validate_rect(&Rect::new(1.0f32, 0.0, 0.0, 0.0)).is_err());
        assert!(validate_rect(&Rect::new(0.0f64, f64::NAN, 1.0, 1.0)).is_err());
    }
}
