use super::*;

impl<T: TreeItem, C: Coord> QuadTree<T, C> {
    /// Items whose rectangle intersects `rect`, each reported once. Touching
    /// edges count as intersecting.
    pub fn query(&self, rect: Rect<C>) -> QuadtreeResult<Vec<&T>> {
        validate_rect(&rect)?;
        let mut found = Vec::new();
        self.visit_rect(&rect, |_, item| {
            found.push(item);
            true
        });
        Ok(found)
    }

    /// Appends the element indices intersecting `rect` to `out`.
    pub fn query_indices(&self, rect: Rect<C>, out: &mut Vec<u32>) -> QuadtreeResult<()> {
        validate_rect(&rect)?;
        self.visit_rect(&rect, |element, _| {
            out.push(element);
            true
        });
        Ok(())
    }

    /// Like [`query`](Self::query), but calls `predicate` on every match
    /// first. The first match it rejects ends the query and is not returned.
    pub fn query_while<F>(&self, rect: Rect<C>, mut predicate: F) -> QuadtreeResult<Vec<&T>>
    where
        F: FnMut(&T) -> bool,
    {
        validate_rect(&rect)?;
        let mut found = Vec::new();
        self.visit_rect(&rect, |_, item| {
            if !predicate(item) {
                return false;
            }
            found.push(item);
            true
        });
        Ok(found)
    }

    /// Calls `f` with the index and item of every element intersecting
    /// `rect` until it returns `false`. Returns whether the walk ran to
    /// completion.
    pub fn walk<F>(&self, rect: Rect<C>, f: F) -> QuadtreeResult<bool>
    where
        F: FnMut(u32, &T) -> bool,
    {
        validate_rect(&rect)?;
        Ok(self.visit_rect(&rect, f))
    }

    fn visit_rect<'a, F>(&'a self, rect: &Rect<C>, mut f: F) -> bool
    where
        F: FnMut(u32, &'a T) -> bool,
    {
        // Taken rather than borrowed so a callback may query this tree again.
        let mut scratch = self.scratch.take();
        scratch.ensure_range(self.elements.size());

        let mut leaves = LeafList::<C>::new();
        self.find_leaves(self.root_data(), rect, &mut leaves);

        let mut completed = true;
        'leaves: for leaf in &leaves {
            let mut link = self.nodes.get(leaf.index, NODE_FIRST);
            while link != NIL {
                let [next, element] = *self.memberships.record(link as u32);
                let element = element as u32;
                if scratch.mark(element) && self.element_rect(element).intersects(rect) {
                    if let Some(item) = self.items[element as usize].as_ref() {
                        if !f(element, item) {
                            completed = false;
                            break 'leaves;
                        }
                    }
                }
                link = next;
            }
        }

        scratch.reset();
        self.scratch.replace(scratch);
        completed
    }
}
