use crate::domain::ports::Element;
use crate::utils::error::Result;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Insertion-ordered sequence of owned elements.
///
/// Elements are only ever added as copies (`Element::duplicate`), so the
/// caller keeps ownership of whatever it passes to [`append`](Self::append).
/// Dropping the container drops every element once, head to tail.
#[derive(Debug)]
pub struct OrderedContainer<T: Element> {
    items: Vec<T>,
}

impl<T: Element> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> OrderedContainer<T> {
    /// Creates an empty container. Nothing is allocated until the first append.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items })
    }

    /// Appends a copy of `element` at the tail.
    ///
    /// The slot is reserved before the copy is made; if either step fails the
    /// container is left exactly as it was.
    pub fn append(&mut self, element: &T) -> Result<()> {
        self.items.try_reserve(1)?;
        let copy = element.duplicate()?;
        self.items.push(copy);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowing cursor in insertion order. Call again to restart; use
    /// `.rev()` to walk from the tail.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// First element matching `predicate`, scanning from the head.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter_mut().find(|item| predicate(item))
    }

    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }
}

impl<T: Element> Element for OrderedContainer<T> {
    /// Deep copy in the same order. On failure the partially filled copy is
    /// dropped here, so the caller never sees it.
    fn duplicate(&self) -> Result<Self> {
        let mut copy = Self::with_capacity(self.items.len())?;
        for item in &self.items {
            copy.items.push(item.duplicate()?);
        }
        Ok(copy)
    }
}

impl<'a, T: Element> IntoIterator for &'a OrderedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element + Serialize> Serialize for OrderedContainer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RosterError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        copies: Cell<usize>,
        drops: Cell<usize>,
        fail_after: Cell<Option<usize>>,
    }

    struct Tracked {
        value: u32,
        counters: Rc<Counters>,
    }

    impl Tracked {
        fn new(value: u32, counters: &Rc<Counters>) -> Self {
            Self {
                value,
                counters: Rc::clone(counters),
            }
        }
    }

    impl Element for Tracked {
        fn duplicate(&self) -> Result<Self> {
            if let Some(remaining) = self.counters.fail_after.get() {
                if remaining == 0 {
                    return Err(RosterError::invalid_argument("tracked", "copy refused"));
                }
                self.counters.fail_after.set(Some(remaining - 1));
            }
            self.counters.copies.set(self.counters.copies.get() + 1);
            Ok(Self::new(self.value, &self.counters))
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.counters.drops.set(self.counters.drops.get() + 1);
        }
    }

    fn values(container: &OrderedContainer<Tracked>) -> Vec<u32> {
        container.iter().map(|t| t.value).collect()
    }

    #[test]
    fn test_append_stores_copy_and_keeps_order() {
        let counters = Rc::new(Counters::default());
        let mut container = OrderedContainer::new();
        for value in [3, 1, 2] {
            let original = Tracked::new(value, &counters);
            container.append(&original).unwrap();
        }

        assert_eq!(container.len(), 3);
        assert_eq!(values(&container), vec![3, 1, 2]);
        assert_eq!(counters.copies.get(), 3);
        // the three originals are gone, the copies live on
        assert_eq!(counters.drops.get(), 3);
    }

    #[test]
    fn test_iteration_is_restartable_and_reversible() {
        let counters = Rc::new(Counters::default());
        let mut container = OrderedContainer::new();
        for value in 1..=4 {
            container.append(&Tracked::new(value, &counters)).unwrap();
        }

        assert_eq!(values(&container), values(&container));
        let reversed: Vec<u32> = container.iter().rev().map(|t| t.value).collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
        assert_eq!(container.first().map(|t| t.value), Some(1));
        assert_eq!(container.last().map(|t| t.value), Some(4));
    }

    #[test]
    fn test_failed_append_leaves_container_unchanged() {
        let counters = Rc::new(Counters::default());
        let mut container = OrderedContainer::new();
        container.append(&Tracked::new(1, &counters)).unwrap();

        counters.fail_after.set(Some(0));
        let result = container.append(&Tracked::new(2, &counters));

        assert!(result.is_err());
        assert_eq!(container.len(), 1);
        assert_eq!(values(&container), vec![1]);
    }

    #[test]
    fn test_duplicate_is_deep_and_independent() {
        let counters = Rc::new(Counters::default());
        let mut original = OrderedContainer::new();
        for value in [10, 20] {
            original.append(&Tracked::new(value, &counters)).unwrap();
        }

        let mut copy = original.duplicate().unwrap();
        copy.append(&Tracked::new(30, &counters)).unwrap();
        original.append(&Tracked::new(40, &counters)).unwrap();

        assert_eq!(values(&copy), vec![10, 20, 30]);
        assert_eq!(values(&original), vec![10, 20, 40]);
    }

    #[test]
    fn test_failed_duplicate_destroys_partial_copy() {
        let counters = Rc::new(Counters::default());
        let mut original = OrderedContainer::new();
        for value in 1..=3 {
            original.append(&Tracked::new(value, &counters)).unwrap();
        }
        let copies_before = counters.copies.get();
        let drops_before = counters.drops.get();

        counters.fail_after.set(Some(2));
        assert!(original.duplicate().is_err());

        // two elements were copied before the failure and both were released
        assert_eq!(counters.copies.get() - copies_before, 2);
        assert_eq!(counters.drops.get() - drops_before, 2);
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn test_drop_destroys_every_element_once() {
        let counters = Rc::new(Counters::default());
        {
            let mut container = OrderedContainer::new();
            for value in 0..5 {
                container.append(&Tracked::new(value, &counters)).unwrap();
            }
            let _copy = container.duplicate().unwrap();
        }
        // five originals, five appended copies, five duplicated copies
        assert_eq!(counters.copies.get(), 10);
        assert_eq!(counters.drops.get(), 15);
    }

    #[test]
    fn test_find_and_position() {
        let counters = Rc::new(Counters::default());
        let mut container = OrderedContainer::new();
        for value in [5, 7, 7] {
            container.append(&Tracked::new(value, &counters)).unwrap();
        }

        assert_eq!(container.position(|t| t.value == 7), Some(1));
        assert!(container.find(|t| t.value == 9).is_none());
        if let Some(found) = container.find_mut(|t| t.value == 5) {
            found.value = 6;
        }
        assert_eq!(values(&container), vec![6, 7, 7]);
    }

    #[test]
    fn test_with_capacity_reports_allocation_failure() {
        let result = OrderedContainer::<Tracked>::with_capacity(usize::MAX);
        assert!(matches!(result, Err(RosterError::AllocationError(_))));
    }
}
