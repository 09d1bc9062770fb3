use super::*;
use fxhash::FxHashMap;

/// Arena occupancy snapshot. `*_range` values include free slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageCounts {
    pub node_range: usize,
    pub leaves: usize,
    pub branches: usize,
    pub memberships: usize,
    pub element_range: usize,
    pub elements: usize,
}

impl<T: TreeItem, C: Coord> QuadTree<T, C> {
    pub fn len(&self) -> usize {
        self.elements.live_len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.elements.is_live(index)
    }

    pub fn get(&self, index: u32) -> Option<&T> {
        self.items.get(index as usize)?.as_ref()
    }

    pub fn rect(&self, index: u32) -> Option<Rect<C>> {
        if self.elements.is_live(index) {
            Some(self.element_rect(index))
        } else {
            None
        }
    }

    /// Live elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Rect<C>, &T)> + '_ {
        self.elements.iter().filter_map(move |(index, fields)| {
            self.items[index as usize]
                .as_ref()
                .map(|item| (index, Rect::from_array(*fields), item))
        })
    }

    pub fn bounds(&self) -> Rect<C> {
        self.root_half.to_rect()
    }

    pub fn max_elements(&self) -> u32 {
        self.max_elements
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn storage_counts(&self) -> StorageCounts {
        let mut leaves = 0;
        let mut branches = 0;
        for (_, node) in self.nodes.iter() {
            if node[NODE_COUNT] == BRANCH {
                branches += 1;
            } else {
                leaves += 1;
            }
        }
        StorageCounts {
            node_range: self.nodes.size(),
            leaves,
            branches,
            memberships: self.memberships.live_len(),
            element_range: self.elements.size(),
            elements: self.elements.live_len(),
        }
    }

    /// Appends the cell of every leaf to `bounding_boxes`.
    pub fn leaf_bounds(&self, bounding_boxes: &mut Vec<Rect<C>>) {
        self.for_each_node(|node, is_leaf| {
            if is_leaf {
                bounding_boxes.push(node.half.to_rect());
            }
        });
    }

    pub fn max_leaf_depth(&self) -> u32 {
        let mut max_depth = 0;
        self.for_each_node(|node, is_leaf| {
            if is_leaf && node.depth > max_depth {
                max_depth = node.depth;
            }
        });
        max_depth
    }

    /// Walks the whole tree and panics if the node table, membership lists,
    /// element store and identity slots disagree.
    pub fn check_invariants(&self) {
        let mut links_per_element: FxHashMap<u32, u32> = FxHashMap::default();
        let mut reachable_nodes = 0usize;
        let mut reachable_links = 0usize;

        self.for_each_node(|node, is_leaf| {
            reachable_nodes += 1;
            let [first, count] = *self.nodes.record(node.index);
            if !is_leaf {
                for child in first..first + 4 {
                    assert!(
                        self.nodes.is_live(child as u32),
                        "branch {} has free child {}",
                        node.index,
                        child
                    );
                }
                return;
            }
            assert!(
                node.depth <= self.max_depth,
                "leaf {} deeper than max depth",
                node.index
            );
            let mut len = 0;
            let mut link = first;
            while link != NIL {
                let [next, element] = *self.memberships.record(link as u32);
                assert!(
                    self.elements.is_live(element as u32),
                    "leaf {} links free element {}",
                    node.index,
                    element
                );
                *links_per_element.entry(element as u32).or_insert(0) += 1;
                len += 1;
                link = next;
            }
            assert_eq!(len, count, "leaf {} count disagrees with its list", node.index);
            reachable_links += len as usize;
        });

        assert_eq!(reachable_nodes, self.nodes.live_len(), "unreachable node records");
        assert_eq!(
            reachable_links,
            self.memberships.live_len(),
            "unreachable membership records"
        );
        assert_eq!(self.items.len(), self.elements.size());
        for (index, item) in self.items.iter().enumerate() {
            let index = index as u32;
            match item {
                Some(item) => {
                    assert!(self.elements.is_live(index), "item stored at free slot {}", index);
                    assert_eq!(item.tree_index(), index as i32, "identity slot mismatch");
                    assert!(
                        links_per_element.get(&index).copied().unwrap_or(0) > 0,
                        "element {} is not linked from any leaf",
                        index
                    );
                }
                None => assert!(!self.elements.is_live(index), "live element {} has no item", index),
            }
        }
    }

    fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(NodeData<C>, bool),
    {
        let mut stack = NodeStack::<C>::new();
        stack.push(self.root_data());
        while let Some(node) = stack.pop() {
            let [first, count] = *self.nodes.record(node.index);
            if count == BRANCH {
                f(node, false);
                for quadrant in 0..4 {
                    stack.push(node.child(first as u32, quadrant));
                }
            } else {
                f(node, true);
            }
        }
    }
}
