//! # Slide sets
//!
//! The rendered strip is the logical items plus, in infinite mode, clones of
//! the last `k` items in front and of the first `k` items behind:
//!
//! ```text
//! items = [1 2 3 4 5], k = 1, infinite
//! strip = 5' 1 2 3 4 5 1'
//! ```
//!
//! Animating into a clone and then swapping to the matching real slide with
//! the animation disabled is what makes wrap-around look continuous.

use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
pub struct Slide<T> {
    pub item: Rc<T>,
    pub is_clone: bool,
    /// 0-based position of `item` in the logical collection.
    pub original_index: usize,
}

impl<T> Clone for Slide<T> {
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            is_clone: self.is_clone,
            original_index: self.original_index,
        }
    }
}

/// Clones placed on each side of the strip; `slides_per_view` is clamped to
/// the item count.
pub fn clone_count(slides_per_view: usize, len: usize, infinite: bool) -> usize {
    if !infinite || len == 0 {
        0
    } else {
        slides_per_view.clamp(1, len)
    }
}

#[derive(Debug)]
pub struct SlideSet<T> {
    slides: Vec<Slide<T>>,
    logical_len: usize,
    leading: usize,
}

impl<T> Clone for SlideSet<T> {
    fn clone(&self) -> Self {
        Self {
            slides: self.slides.clone(),
            logical_len: self.logical_len,
            leading: self.leading,
        }
    }
}

impl<T> Default for SlideSet<T> {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            logical_len: 0,
            leading: 0,
        }
    }
}

impl<T> SlideSet<T> {
    pub fn build(items: &[Rc<T>], slides_per_view: usize, infinite: bool) -> Self {
        let n = items.len();
        let k = clone_count(slides_per_view, n, infinite);
        if infinite && n > 0 && slides_per_view > n {
            log::warn!("slides: slidesPerView {slides_per_view} exceeds {n} items; cloning {k}");
        }

        let slide = |i: usize, is_clone: bool| Slide {
            item: items[i].clone(),
            is_clone,
            original_index: i,
        };

        let mut slides = Vec::with_capacity(n + 2 * k);
        slides.extend((n - k..n).map(|i| slide(i, true)));
        slides.extend((0..n).map(|i| slide(i, false)));
        slides.extend((0..k).map(|i| slide(i, true)));

        Self {
            slides,
            logical_len: n,
            leading: k,
        }
    }

    /// Rendered length, clones included.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    pub fn leading_clones(&self) -> usize {
        self.leading
    }

    pub fn get(&self, slot: usize) -> Option<&Slide<T>> {
        self.slides.get(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide<T>> {
        self.slides.iter()
    }

    /// Strip slot at which logical item `index` (1-based) rests.
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        (1..=self.logical_len)
            .contains(&index)
            .then(|| self.leading + index - 1)
    }
}

impl<'a, T> IntoIterator for &'a SlideSet<T> {
    type Item = &'a Slide<T>;
    type IntoIter = std::slice::Iter<'a, Slide<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// Compact strip, 1-based, clones primed: `5' 1 2 3 4 5 1'`.
impl<T> fmt::Display for SlideSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.slides.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", s.original_index + 1)?;
            if s.is_clone {
                f.write_str("'")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Rc<char>> {
        ('a'..).take(n).map(Rc::new).collect()
    }

    #[test]
    fn test_finite_set_is_the_items() {
        let set = SlideSet::build(&items(4), 2, false);
        assert_eq!(set.len(), 4);
        assert_eq!(set.leading_clones(), 0);
        assert!(set.iter().all(|s| !s.is_clone));
        insta::assert_snapshot!(set.to_string(), @"1 2 3 4");
    }

    #[test]
    fn test_infinite_single_view() {
        let set = SlideSet::build(&items(5), 1, true);
        assert_eq!(set.len(), 7);
        assert_eq!(set.logical_len(), 5);
        insta::assert_snapshot!(set.to_string(), @"5' 1 2 3 4 5 1'");
        assert_eq!(*set.get(0).unwrap().item, 'e');
        assert_eq!(*set.get(6).unwrap().item, 'a');
    }

    #[test]
    fn test_infinite_multi_view_keeps_original_order() {
        let set = SlideSet::build(&items(5), 2, true);
        assert_eq!(set.len(), 5 + 2 * 2);
        insta::assert_snapshot!(set.to_string(), @"4' 5' 1 2 3 4 5 1' 2'");
        assert_eq!(set.slot_of(1), Some(2));
        assert_eq!(set.slot_of(5), Some(6));
        assert_eq!(set.slot_of(6), None);
    }

    #[test]
    fn test_slides_per_view_clamped_to_item_count() {
        let set = SlideSet::build(&items(2), 5, true);
        assert_eq!(set.leading_clones(), 2);
        assert_eq!(set.len(), 6);
        insta::assert_snapshot!(set.to_string(), @"1' 2' 1 2 1' 2'");
    }

    #[test]
    fn test_empty_items() {
        let set = SlideSet::<char>::build(&[], 3, true);
        assert!(set.is_empty());
        assert_eq!(set.leading_clones(), 0);
        assert_eq!(set.slot_of(1), None);
    }

    #[test]
    fn test_clones_share_item_allocation() {
        let src = items(3);
        let set = SlideSet::build(&src, 1, true);
        assert!(Rc::ptr_eq(&set.get(0).unwrap().item, &src[2]));
        assert!(Rc::ptr_eq(&set.get(4).unwrap().item, &src[0]));
        assert_eq!(Rc::strong_count(&src[0]), 3);
    }
}
