//! Binary min-heap with stable handles and decrease-key
//!
//! Entries are addressed by the [`Handle`] returned from
//! [`IndexedMinHeap::insert`], so payloads never need to be hashable. Ordering
//! comes from a [`Comparator`] owned by the heap. The comparator may carry
//! state that the caller mutates between operations (a distance table is the
//! usual case), which is why keys can be lowered from outside and then
//! repaired with [`IndexedMinHeap::decrease`].
//!
//! # Aliasing rules for comparator state
//!
//! State reachable through [`IndexedMinHeap::order_mut`] may only change in
//! ways that lower the key of entries still in the heap, and every entry whose
//! key was lowered must be passed to `decrease` before the next `insert` or
//! `pop`. The borrow checker already prevents the state from changing while a
//! heap operation is running.

use thiserror::Error;

/// Strict "less than" used to order heap entries.
pub trait Comparator<T> {
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders payloads by their own `Ord` impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Stable identity of an inserted entry. Handles are issued densely from 0
/// in insertion order and are never reused by the same heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(usize);

impl Handle {
    /// Position in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("{0:?} is not in the heap")]
    Absent(Handle),
    /// The key went up; the entry has been moved down to restore heap order.
    #[error("key of {0:?} increased, decrease only supports lowering a key")]
    Increased(Handle),
}

#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, C> {
    /// Implicit binary tree: children of `i` live at `2i + 1` and `2i + 2`.
    tree: Vec<(Handle, T)>,
    /// `slots[h]` is the tree index of handle `h`, `None` once popped.
    slots: Vec<Option<usize>>,
    order: C,
}

impl<T, C: Comparator<T>> IndexedMinHeap<T, C> {
    pub fn new(order: C) -> Self {
        Self::with_capacity(0, order)
    }

    pub fn with_capacity(capacity: usize, order: C) -> Self {
        Self {
            tree: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Whether `handle` was issued by this heap and has not been popped yet.
    pub fn contains(&self, handle: Handle) -> bool {
        self.slot(handle).is_some()
    }

    /// Payload of a handle still in the heap.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slot(handle).map(|slot| &self.tree[slot].1)
    }

    pub fn order(&self) -> &C {
        &self.order
    }

    /// Mutable access to the comparator; see the module docs for the rules.
    pub fn order_mut(&mut self) -> &mut C {
        &mut self.order
    }

    pub fn insert(&mut self, value: T) -> Handle {
        let handle = Handle(self.slots.len());
        let slot = self.tree.len();
        self.tree.push((handle, value));
        self.slots.push(Some(slot));
        self.sift_up(slot);
        handle
    }

    /// Minimum entry, or `None` when the heap is empty.
    pub fn top(&self) -> Option<(Handle, &T)> {
        self.tree.first().map(|(handle, value)| (*handle, value))
    }

    /// Remove and return the minimum entry, or `None` when the heap is empty.
    pub fn pop(&mut self) -> Option<(Handle, T)> {
        let last = self.tree.len().checked_sub(1)?;
        self.swap(0, last);
        let (handle, value) = self.tree.pop()?;
        self.slots[handle.0] = None;
        if !self.tree.is_empty() {
            self.sift_down(0);
        }
        Some((handle, value))
    }

    /// Restore heap order after the key of `handle` was lowered.
    ///
    /// Only moves the entry towards the root. If the key actually went up the
    /// entry is sifted down instead, so the heap stays valid, and
    /// [`HeapError::Increased`] reports the misuse.
    pub fn decrease(&mut self, handle: Handle) -> Result<(), HeapError> {
        let slot = self.slot(handle).ok_or(HeapError::Absent(handle))?;
        let slot = self.sift_up(slot);
        if self.smaller_child(slot).is_some() {
            self.sift_down(slot);
            return Err(HeapError::Increased(handle));
        }
        Ok(())
    }

    fn slot(&self, handle: Handle) -> Option<usize> {
        self.slots.get(handle.0).copied().flatten()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.order.less(&self.tree[a].1, &self.tree[b].1)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.tree.swap(a, b);
        self.slots[self.tree[a].0.0] = Some(a);
        self.slots[self.tree[b].0.0] = Some(b);
    }

    /// Returns the slot the entry settled in.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        while let Some(child) = self.smaller_child(slot) {
            self.swap(slot, child);
            slot = child;
        }
    }

    /// The smaller child of `slot` if it compares less than `slot` itself.
    fn smaller_child(&self, slot: usize) -> Option<usize> {
        let left = 2 * slot + 1;
        if left >= self.tree.len() {
            return None;
        }
        let right = left + 1;
        let child = if right < self.tree.len() && self.less(right, left) {
            right
        } else {
            left
        };
        self.less(child, slot).then_some(child)
    }

    /// Panics unless heap order and the position index are both intact.
    #[cfg(test)]
    fn assert_invariants(&self) {
        for slot in 1..self.tree.len() {
            let parent = (slot - 1) / 2;
            assert!(
                !self.less(slot, parent),
                "heap order violated between slot {parent} and child {slot}"
            );
        }
        for (slot, (handle, _)) in self.tree.iter().enumerate() {
            assert_eq!(self.slots[handle.0], Some(slot), "stale position for {handle:?}");
        }
        let live = self.slots.iter().flatten().count();
        assert_eq!(live, self.tree.len(), "popped handles still indexed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Priorities live outside the payload, like a distance table.
    #[derive(Debug, Clone)]
    struct Priorities(Vec<u32>);

    impl Comparator<usize> for Priorities {
        fn less(&self, a: &usize, b: &usize) -> bool {
            self.0[*a] < self.0[*b]
        }
    }

    #[test]
    fn empty_heap_reports_none() {
        let mut heap: IndexedMinHeap<u32, _> = IndexedMinHeap::new(NaturalOrder);
        assert!(heap.is_empty());
        assert!(heap.top().is_none());
        assert!(heap.pop().is_none());
    }

    #[test]
    fn pops_in_ascending_order() {
        let mut heap = IndexedMinHeap::new(NaturalOrder);
        for value in [5, 3, 8, 1, 9, 2] {
            heap.insert(value);
            heap.assert_invariants();
        }
        assert_eq!(heap.top().map(|(_, v)| *v), Some(1));

        let mut popped = Vec::new();
        while let Some((_, value)) = heap.pop() {
            heap.assert_invariants();
            popped.push(value);
        }
        assert_eq!(popped, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn handles_follow_insertion_order() {
        let mut heap = IndexedMinHeap::new(NaturalOrder);
        let a = heap.insert('c');
        let b = heap.insert('a');
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(heap.pop(), Some((b, 'a')));
        assert!(!heap.contains(b));
        assert_eq!(heap.get(a), Some(&'c'));
        assert_eq!(heap.get(b), None);
    }

    #[test]
    fn closures_work_as_comparators() {
        let mut heap = IndexedMinHeap::new(|a: &i32, b: &i32| a > b);
        for value in [1, 7, 4] {
            heap.insert(value);
        }
        assert_eq!(heap.pop().map(|(_, v)| v), Some(7));
    }

    #[test]
    fn decrease_moves_entry_to_top() {
        let mut heap = IndexedMinHeap::new(Priorities(vec![10, 20, 30, 40]));
        let handles: Vec<_> = (0..4).map(|cell| heap.insert(cell)).collect();

        heap.order_mut().0[3] = 5;
        heap.decrease(handles[3]).unwrap();
        heap.assert_invariants();

        assert_eq!(heap.pop(), Some((handles[3], 3)));
        assert_eq!(heap.pop(), Some((handles[0], 0)));
    }

    #[test]
    fn decrease_of_popped_handle_is_absent() {
        let mut heap = IndexedMinHeap::new(NaturalOrder);
        let only = heap.insert(1);
        heap.pop();
        assert_eq!(heap.decrease(only), Err(HeapError::Absent(only)));
        assert_eq!(heap.decrease(Handle(42)), Err(HeapError::Absent(Handle(42))));
    }

    #[test]
    fn increased_key_is_reported_and_repaired() {
        let mut heap = IndexedMinHeap::new(Priorities(vec![1, 2, 3, 4, 5]));
        let handles: Vec<_> = (0..5).map(|cell| heap.insert(cell)).collect();

        heap.order_mut().0[0] = 100;
        assert_eq!(heap.decrease(handles[0]), Err(HeapError::Increased(handles[0])));
        heap.assert_invariants();
        assert_eq!(heap.pop().map(|(_, v)| v), Some(1));
    }

    #[test]
    fn equal_keys_all_come_out() {
        let mut heap = IndexedMinHeap::new(NaturalOrder);
        for _ in 0..5 {
            heap.insert(7);
        }
        heap.assert_invariants();
        let mut count = 0;
        while heap.pop().is_some() {
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u32),
        Pop,
        /// Lower the key of the n-th live entry by the given amount
        Decrease(usize, u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..1000).prop_map(Op::Insert),
            Just(Op::Pop),
            (any::<usize>(), 0u32..500).prop_map(|(n, by)| Op::Decrease(n, by)),
        ]
    }

    proptest! {
        /// Heap order and the position index survive any operation sequence,
        /// and every pop returns the smallest live key.
        #[test]
        fn invariants_hold_under_random_operations(ops in prop::collection::vec(op(), 1..200)) {
            let mut heap = IndexedMinHeap::new(Priorities(Vec::new()));
            let mut live: Vec<Handle> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        let cell = heap.order().0.len();
                        heap.order_mut().0.push(key);
                        live.push(heap.insert(cell));
                    }
                    Op::Pop => {
                        let expected = live.iter().map(|h| heap.order().0[h.index()]).min();
                        let popped = heap.pop();
                        prop_assert_eq!(popped.map(|(_, cell)| heap.order().0[cell]), expected);
                        if let Some((handle, _)) = popped {
                            live.retain(|h| *h != handle);
                        }
                    }
                    Op::Decrease(n, by) if !live.is_empty() => {
                        let handle = live[n % live.len()];
                        let key = &mut heap.order_mut().0[handle.index()];
                        *key = key.saturating_sub(by);
                        prop_assert_eq!(heap.decrease(handle), Ok(()));
                    }
                    Op::Decrease(..) => {}
                }
                heap.assert_invariants();
            }
        }

        /// Popping a permutation of distinct values yields them sorted.
        #[test]
        fn permutation_pops_sorted(values in Just((0..64u32).collect::<Vec<_>>()).prop_shuffle()) {
            let mut heap = IndexedMinHeap::new(NaturalOrder);
            for value in values {
                heap.insert(value);
            }
            let popped: Vec<_> = std::iter::from_fn(|| heap.pop().map(|(_, v)| v)).collect();
            prop_assert_eq!(popped, (0..64).collect::<Vec<_>>());
        }

        /// A decreased entry comes out no later than it would have with its
        /// original key.
        #[test]
        fn decrease_never_delays_an_entry(
            keys in prop::collection::vec(0u32..100, 2..40),
            pick in any::<prop::sample::Index>(),
            lowered_to in 0u32..100,
        ) {
            let target = pick.index(keys.len());
            let rank = |heap: &mut IndexedMinHeap<usize, Priorities>| {
                std::iter::from_fn(|| heap.pop().map(|(_, cell)| cell))
                    .position(|cell| cell == target)
            };

            let mut original = IndexedMinHeap::new(Priorities(keys.clone()));
            let mut lowered = IndexedMinHeap::new(Priorities(keys.clone()));
            let mut handle = None;
            for cell in 0..keys.len() {
                original.insert(cell);
                let h = lowered.insert(cell);
                if cell == target {
                    handle = Some(h);
                }
            }

            let new_key = lowered_to.min(keys[target]);
            lowered.order_mut().0[target] = new_key;
            prop_assert_eq!(lowered.decrease(handle.unwrap()), Ok(()));

            // Ties make exact ranks arbitrary; compare against the worst case of
            // the original (every entry with key <= its key comes first).
            let worst_original = keys.iter().filter(|k| **k <= keys[target]).count() - 1;
            let lowered_rank = rank(&mut lowered).unwrap();
            let strictly_smaller = keys
                .iter()
                .enumerate()
                .filter(|(i, k)| *i != target && **k < new_key)
                .count();
            prop_assert!(lowered_rank <= worst_original);
            prop_assert!(lowered_rank >= strictly_smaller);
            prop_assert!(rank(&mut original).is_some());
        }
    }
}
