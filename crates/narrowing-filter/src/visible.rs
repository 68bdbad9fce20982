//! Per-item visibility flags for display tree groups

use std::ops::Index;

/// Fixed-size visibility flags, one bit per item of a group
///
/// The length is set once when the group is finalized and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    words: Vec<u64>,
    len: usize,
}

impl VisibleSet {
    /// Create a set of `len` flags, all set to `visible`
    pub fn new(len: usize, visible: bool) -> Self {
        let mut set = Self {
            words: vec![0; len.div_ceil(64)],
            len,
        };
        set.set_all(visible);
        set
    }

    /// Number of flags
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, pos: usize) -> bool {
        assert!(pos < self.len);
        self.words[pos >> 6] & (1 << (pos % 64)) != 0
    }

    #[inline]
    pub fn set(&mut self, pos: usize, visible: bool) {
        assert!(pos < self.len);
        if visible {
            self.words[pos >> 6] |= 1 << (pos % 64);
        } else {
            self.words[pos >> 6] &= !(1 << (pos % 64));
        }
    }

    pub fn set_all(&mut self, visible: bool) {
        let fill = if visible { u64::MAX } else { 0 };
        for word in self.words.iter_mut() {
            *word = fill;
        }
        // Bits past `len` stay clear so `count` is exact
        let tail = self.len % 64;
        if visible && tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = (1 << tail) - 1;
            }
        }
    }

    /// Number of visible flags
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Positions of the visible flags, ascending
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&pos| self.get(pos))
    }

    /// The visible elements of `items`, in their original order
    pub fn filter<'a, A>(&'a self, items: &'a [A]) -> impl Iterator<Item = &'a A> + 'a {
        items
            .iter()
            .enumerate()
            .filter(move |(pos, _)| *pos < self.len && self.get(*pos))
            .map(|(_, item)| item)
    }
}

impl Index<usize> for VisibleSet {
    type Output = bool;

    #[inline]
    fn index(&self, pos: usize) -> &Self::Output {
        if self.get(pos) {
            &true
        } else {
            &false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_visible() {
        for len in [0, 1, 63, 64, 65, 130] {
            let set = VisibleSet::new(len, true);
            assert_eq!(set.len(), len);
            assert_eq!(set.count(), len);
        }
    }

    #[test]
    fn test_set_and_count() {
        let mut set = VisibleSet::new(70, false);
        assert_eq!(set.count(), 0);
        set.set(0, true);
        set.set(64, true);
        set.set(69, true);
        assert!(set[64]);
        assert!(!set[1]);
        assert_eq!(set.count(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 64, 69]);

        set.set(64, false);
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_set_all_resets() {
        let mut set = VisibleSet::new(5, true);
        set.set_all(false);
        assert_eq!(set.count(), 0);
        set.set_all(true);
        assert_eq!(set.count(), 5);
    }

    #[test]
    fn test_filter_keeps_order() {
        let items = ["a", "b", "c", "d"];
        let mut set = VisibleSet::new(items.len(), false);
        set.set(3, true);
        set.set(1, true);
        let visible: Vec<_> = set.filter(&items).copied().collect();
        assert_eq!(visible, vec!["b", "d"]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        VisibleSet::new(3, true).get(3);
    }
}
