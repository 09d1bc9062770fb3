use crate::error::{ArenaError, ArenaResult};

const MIN_GROWTH: usize = 8;

#[derive(Clone, Copy, Debug)]
enum Slot<T: Copy, const F: usize> {
    Live([T; F]),
    Free(Option<u32>),
}

/// Flat array of fixed-width records with O(1) allocate and free.
///
/// Each record holds `F` fields of type `T`. Erased records are threaded onto
/// an intrusive free list and handed out again by the next `insert`, so an
/// index stays valid until it is erased and the range only grows until
/// `clear`.
#[derive(Clone, Debug)]
pub struct ArenaList<T: Copy, const F: usize> {
    slots: Vec<Slot<T, F>>,
    free_head: Option<u32>,
    live: usize,
}

impl<T: Copy + Default, const F: usize> ArenaList<T, F> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    pub fn with_capacity(records: usize) -> Self {
        Self {
            slots: Vec::with_capacity(records),
            free_head: None,
            live: 0,
        }
    }

    /// Allocates a record with every field set to `T::default()`.
    #[inline(always)]
    pub fn insert(&mut self) -> u32 {
        self.insert_with([T::default(); F])
    }

    /// Allocates a record holding `fields`, reusing the most recently erased
    /// slot when one exists.
    pub fn insert_with(&mut self, fields: [T; F]) -> u32 {
        self.live += 1;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            self.free_head = match *slot {
                Slot::Free(next) => next,
                Slot::Live(_) => unreachable!("free list points at live record {}", index),
            };
            *slot = Slot::Live(fields);
            return index;
        }

        self.grow_if_full();
        let index = self.slots.len();
        debug_assert!(
            index < u32::MAX as usize,
            "arena range exceeds u32 indices"
        );
        self.slots.push(Slot::Live(fields));
        index as u32
    }

    /// Pushes `index` onto the free list head.
    pub fn erase(&mut self, index: u32) -> ArenaResult<()> {
        let size = self.slots.len();
        let slot = self
            .slots
            .get_mut(index as usize)
            .ok_or(ArenaError::OutOfBounds { index, size })?;
        if let Slot::Free(_) = slot {
            return Err(ArenaError::DoubleErase { index });
        }
        *slot = Slot::Free(self.free_head);
        self.free_head = Some(index);
        self.live -= 1;
        Ok(())
    }

    #[inline(always)]
    pub fn get(&self, index: u32, field: usize) -> T {
        self.record(index)[field]
    }

    #[inline(always)]
    pub fn set(&mut self, index: u32, field: usize, value: T) {
        self.record_mut(index)[field] = value;
    }

    pub fn try_get(&self, index: u32, field: usize) -> Option<T> {
        match self.slots.get(index as usize)? {
            Slot::Live(fields) => fields.get(field).copied(),
            Slot::Free(_) => None,
        }
    }

    /// Panics if `index` is out of range or names a free record.
    #[inline(always)]
    pub fn record(&self, index: u32) -> &[T; F] {
        match &self.slots[index as usize] {
            Slot::Live(fields) => fields,
            Slot::Free(_) => panic!("arena record {} is free", index),
        }
    }

    #[inline(always)]
    pub fn record_mut(&mut self, index: u32) -> &mut [T; F] {
        match &mut self.slots[index as usize] {
            Slot::Live(fields) => fields,
            Slot::Free(_) => panic!("arena record {} is free", index),
        }
    }

    #[inline(always)]
    pub fn is_live(&self, index: u32) -> bool {
        matches!(self.slots.get(index as usize), Some(Slot::Live(_)))
    }

    /// Live plus free slots.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn live_len(&self) -> usize {
        self.live
    }

    #[inline(always)]
    pub fn free_len(&self) -> usize {
        self.slots.len() - self.live
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every record and forgets the free list. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[T; F])> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Live(fields) => Some((index as u32, fields)),
                Slot::Free(_) => None,
            })
    }

    fn grow_if_full(&mut self) {
        let capacity = self.slots.capacity();
        if self.slots.len() == capacity {
            self.slots.reserve_exact(capacity.max(MIN_GROWTH));
        }
    }
}

impl<T: Copy + Default, const F: usize> Default for ArenaList<T, F> {
    fn default() -> Self {
        Self::new()
    }
}
