use super::*;

impl<T: TreeItem, C: Coord> QuadTree<T, C> {
    /// Removes the element at `index` and hands its item back with the
    /// identity slot reset to [`NOT_INSERTED`].
    pub fn remove(&mut self, index: u32) -> QuadtreeResult<T> {
        if !self.elements.is_live(index) {
            return Err(QuadtreeError::NotFound {
                index: index as i32,
            });
        }
        let rect = self.element_rect(index);
        self.unlink_element(index, &rect);
        self.elements.erase(index)?;

        let mut item = self.items[index as usize]
            .take()
            .ok_or(QuadtreeError::NotFound {
                index: index as i32,
            })?;
        item.set_tree_index(NOT_INSERTED);
        Ok(item)
    }

    /// Removes the element named by `item`'s identity slot.
    ///
    /// `item` is usually a copy taken before insertion handed it to the tree,
    /// so it must still equal the stored item. A stale copy whose index has
    /// been reused by another item fails with `NotFound`.
    pub fn remove_item(&mut self, item: &T) -> QuadtreeResult<T>
    where
        T: PartialEq,
    {
        let index = item.tree_index();
        let stored = if index < 0 { None } else { self.get(index as u32) };
        match stored {
            Some(stored) if stored == item => self.remove(index as u32),
            _ => Err(QuadtreeError::NotFound { index }),
        }
    }

    /// Moves a live element to `rect`, keeping its index.
    pub fn relocate(&mut self, index: u32, rect: Rect<C>) -> QuadtreeResult<()> {
        if !self.elements.is_live(index) {
            return Err(QuadtreeError::NotFound {
                index: index as i32,
            });
        }
        validate_rect(&rect)?;

        let old = self.element_rect(index);
        self.unlink_element(index, &old);
        *self.elements.record_mut(index) = rect.to_array();
        self.insert_element(self.root_data(), index);
        Ok(())
    }

    /// Drops the membership link of `element` from every leaf `rect` is filed
    /// into.
    pub(crate) fn unlink_element(&mut self, element: u32, rect: &Rect<C>) {
        let mut leaves = LeafList::<C>::new();
        self.find_leaves(self.root_data(), rect, &mut leaves);
        for leaf in leaves {
            let mut prev = NIL;
            let mut link = self.nodes.get(leaf.index, NODE_FIRST);
            let mut found = false;
            while link != NIL {
                let [next, linked] = *self.memberships.record(link as u32);
                if linked as u32 == element {
                    if prev == NIL {
                        self.nodes.set(leaf.index, NODE_FIRST, next);
                    } else {
                        self.memberships.set(prev as u32, LINK_NEXT, next);
                    }
                    self.free_link(link as u32);
                    let count = self.nodes.get(leaf.index, NODE_COUNT);
                    self.nodes.set(leaf.index, NODE_COUNT, count - 1);
                    found = true;
                    break;
                }
                prev = link;
                link = next;
            }
            debug_assert!(
                found,
                "element {} missing from leaf {}",
                element,
                leaf.index
            );
        }
    }

    /// Merges every branch whose four children are empty leaves back into an
    /// empty leaf and returns how many were merged.
    ///
    /// One pass only: a branch is judged before its children are, so a parent
    /// that becomes mergeable because of this pass is merged by the next call.
    /// Use [`compact`](Self::compact) to run until nothing changes.
    pub fn cleanup(&mut self) -> usize {
        if !self.is_branch(ROOT) {
            return 0;
        }
        let mut merged = 0usize;
        let mut stack: SmallVec<[u32; 64]> = SmallVec::new();
        stack.push(ROOT);
        while let Some(node) = stack.pop() {
            let first = self.nodes.get(node, NODE_FIRST) as u32;
            let mut empty_leaves = 0;
            for child in first..first + 4 {
                match self.nodes.get(child, NODE_COUNT) {
                    0 => empty_leaves += 1,
                    BRANCH => stack.push(child),
                    _ => {}
                }
            }
            if empty_leaves == 4 {
                // Descending, so the next split pops the block back in order.
                for child in (first..first + 4).rev() {
                    self.free_node(child);
                }
                *self.nodes.record_mut(node) = EMPTY_LEAF;
                merged += 1;
            }
        }
        if merged > 0 {
            log::debug!("cleanup merged {} branches", merged);
        }
        merged
    }

    /// Runs [`cleanup`](Self::cleanup) until it merges nothing.
    pub fn compact(&mut self) -> usize {
        let mut total = 0;
        loop {
            let merged = self.cleanup();
            if merged == 0 {
                return total;
            }
            total += merged;
        }
    }

    /// Drops every item and resets the tree to a single empty root leaf.
    ///
    /// The items' identity slots are not reset; they are dropped with the
    /// tree's storage.
    pub fn clear(&mut self) {
        log::debug!("clearing quadtree with {} elements", self.elements.live_len());
        self.elements.clear();
        self.memberships.clear();
        self.nodes.clear();
        self.nodes.insert_with(EMPTY_LEAF);
        self.items.clear();
        debug_assert!(self.scratch.get_mut().touched.is_empty());
    }
}
