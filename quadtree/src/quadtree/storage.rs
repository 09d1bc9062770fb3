use super::*;

/// Query scratch: one visited flag per element slot plus the list of flags
/// set by the running query, so clearing costs only what was touched.
#[derive(Default)]
pub(crate) struct VisitScratch {
    pub(crate) visited: Vec<bool>,
    pub(crate) touched: Vec<u32>,
}

impl VisitScratch {
    /// Grows the flag buffer to cover `range` element slots. Never shrinks.
    #[inline(always)]
    pub(crate) fn ensure_range(&mut self, range: usize) {
        if self.visited.len() < range {
            self.visited.resize(range, false);
        }
    }

    /// Marks `element` and reports whether it was unmarked before.
    #[inline(always)]
    pub(crate) fn mark(&mut self, element: u32) -> bool {
        let slot = &mut self.visited[element as usize];
        if *slot {
            return false;
        }
        *slot = true;
        self.touched.push(element);
        true
    }

    #[inline(always)]
    pub(crate) fn reset(&mut self) {
        for &element in &self.touched {
            self.visited[element as usize] = false;
        }
        self.touched.clear();
    }
}

/// Quadtree over boxes with `C` coordinates storing items of type `T`.
///
/// Single-writer: queries take `&self` but reuse a scratch buffer behind a
/// `RefCell`, so a tree can move between threads but cannot be shared by them.
pub struct QuadTree<T: TreeItem, C: Coord> {
    pub(crate) root_half: HalfExtent<C>,
    pub(crate) nodes: NodeTable,
    pub(crate) memberships: MembershipArena,
    pub(crate) elements: ElementStore<C>,
    // Parallel to `elements`; `None` exactly at free element slots.
    pub(crate) items: Vec<Option<T>>,
    pub(crate) max_elements: u32,
    pub(crate) max_depth: u32,
    pub(crate) scratch: RefCell<VisitScratch>,
}

impl<T: TreeItem, C: Coord> QuadTree<T, C> {
    #[inline(always)]
    pub(crate) fn root_data(&self) -> NodeData<C> {
        NodeData {
            index: ROOT,
            half: self.root_half,
            depth: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn element_rect(&self, element: u32) -> Rect<C> {
        Rect::from_array(*self.elements.record(element))
    }

    #[inline(always)]
    pub(crate) fn is_branch(&self, node: u32) -> bool {
        self.nodes.get(node, NODE_COUNT) == BRANCH
    }

    pub(crate) fn store_item(&mut self, element: u32, item: T) {
        let idx = element as usize;
        debug_assert!(idx <= self.items.len());
        if idx == self.items.len() {
            self.items.push(Some(item));
        } else {
            debug_assert!(self.items[idx].is_none(), "element {} already has an item", idx);
            self.items[idx] = Some(item);
        }
    }

    /// Collects every leaf under `start` whose cell `extent` is filed into.
    pub(crate) fn find_leaves(&self, start: NodeData<C>, extent: &Rect<C>, leaves: &mut LeafList<C>) {
        let mut stack = NodeStack::<C>::new();
        stack.push(start);
        let mut targets = [0usize; 4];
        while let Some(node) = stack.pop() {
            let [first, count] = *self.nodes.record(node.index);
            if count != BRANCH {
                leaves.push(node);
                continue;
            }
            let targets_len = child_targets_for_extent(node.half, extent, &mut targets);
            for &quadrant in &targets[..targets_len] {
                stack.push(node.child(first as u32, quadrant));
            }
        }
    }

    #[inline(always)]
    pub(crate) fn free_link(&mut self, link: u32) {
        let erased = self.memberships.erase(link);
        debug_assert!(erased.is_ok(), "membership {} erased twice", link);
    }

    #[inline(always)]
    pub(crate) fn free_node(&mut self, node: u32) {
        let erased = self.nodes.erase(node);
        debug_assert!(erased.is_ok(), "node {} erased twice", node);
    }
}
