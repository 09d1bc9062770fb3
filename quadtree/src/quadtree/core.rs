use super::*;

impl<T: TreeItem, C: Coord> QuadTree<T, C> {
    /// Creates a tree whose root covers `(0, 0)..(width, height)`.
    pub fn new(
        width: C,
        height: C,
        max_elements: u32,
        max_depth: u32,
        initial_capacity: usize,
    ) -> QuadtreeResult<Self> {
        Self::new_with_config(
            width,
            height,
            Config {
                max_elements,
                max_depth,
                initial_capacity,
            },
        )
    }

    pub fn new_with_config(width: C, height: C, config: Config) -> QuadtreeResult<Self> {
        if config.max_elements == 0 {
            return Err(QuadtreeError::InvalidConfiguration {
                reason: "max_elements must be at least 1",
            });
        }
        if !(width >= C::ZERO && height >= C::ZERO) {
            return Err(QuadtreeError::InvalidConfiguration {
                reason: "width and height must be non-negative",
            });
        }

        let capacity = config.initial_capacity;
        let mut nodes = NodeTable::with_capacity(capacity.max(1));
        nodes.insert_with(EMPTY_LEAF);
        log::debug!(
            "quadtree created: {:?}x{:?}, max_elements {}, max_depth {}",
            width,
            height,
            config.max_elements,
            config.max_depth
        );
        Ok(Self {
            root_half: HalfExtent::root(width, height),
            nodes,
            memberships: MembershipArena::with_capacity(capacity),
            elements: ElementStore::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
            max_elements: config.max_elements,
            max_depth: config.max_depth,
            scratch: RefCell::new(VisitScratch::default()),
        })
    }

    /// Stores `item` under `rect` and returns its element index, which is also
    /// written into the item's identity slot.
    ///
    /// Fails without touching the tree if the item is already a member of a
    /// tree or `rect` is inverted.
    pub fn insert(&mut self, rect: Rect<C>, mut item: T) -> QuadtreeResult<u32> {
        let current = item.tree_index();
        if current != NOT_INSERTED {
            return Err(QuadtreeError::AlreadyInserted { index: current });
        }
        validate_rect(&rect)?;

        let element = self.elements.insert_with(rect.to_array());
        self.insert_element(self.root_data(), element);
        item.set_tree_index(element as i32);
        self.store_item(element, item);
        Ok(element)
    }

    /// Links `element` into every leaf under `start` that its stored rectangle
    /// overlaps. Splits refile through a work stack, so depth never grows the
    /// call stack.
    pub(crate) fn insert_element(&mut self, start: NodeData<C>, element: u32) {
        let mut pending = RefileStack::<C>::new();
        pending.push((start, element));
        let mut leaves = LeafList::<C>::new();
        while let Some((node, element)) = pending.pop() {
            let rect = self.element_rect(element);
            leaves.clear();
            self.find_leaves(node, &rect, &mut leaves);
            for &leaf in &leaves {
                if self.link_element(leaf, element) {
                    self.split(leaf, &mut pending);
                }
            }
        }
    }

    /// Returns true when the leaf is now full and may still split.
    fn link_element(&mut self, leaf: NodeData<C>, element: u32) -> bool {
        let [head, count] = *self.nodes.record(leaf.index);
        debug_assert!(count != BRANCH, "node {} is not a leaf", leaf.index);
        let link = self.memberships.insert_with([head, element as i32]);
        let count = count + 1;
        *self.nodes.record_mut(leaf.index) = [link as i32, count];

        count as u32 == self.max_elements && leaf.depth < self.max_depth
    }

    /// Turns a full leaf into a branch with four empty leaves and queues its
    /// elements for refiling below it. Children may split again.
    fn split(&mut self, leaf: NodeData<C>, pending: &mut RefileStack<C>) {
        let mut link = self.nodes.get(leaf.index, NODE_FIRST);
        let mut detached = 0usize;
        while link != NIL {
            let [next, element] = *self.memberships.record(link as u32);
            pending.push((leaf, element as u32));
            self.free_link(link as u32);
            detached += 1;
            link = next;
        }

        let first = self.nodes.insert_with(EMPTY_LEAF);
        for offset in 1..4 {
            let child = self.nodes.insert_with(EMPTY_LEAF);
            debug_assert_eq!(child, first + offset, "children must be contiguous");
        }
        *self.nodes.record_mut(leaf.index) = [first as i32, BRANCH];
        log::trace!(
            "split node {} at depth {} into {}..{} ({} elements)",
            leaf.index,
            leaf.depth,
            first,
            first + 4,
            detached
        );
    }
}
