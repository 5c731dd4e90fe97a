//! `Result` / `Option` が共有する 0 または 1 要素のイテレータ。
//!
//! 値を持つバリアント (`Ok` / `Some`) は 1 要素、持たないバリアント
//! (`Err` / `Nothing`) は空列を生成する。どちらも有限で、一度 `None` を
//! 返した後は常に `None` を返す (`FusedIterator`)。

use std::iter::FusedIterator;

/// ペイロードを所有したまま取り出すイテレータ。
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(slot: std::option::Option<T>) -> Self {
        Self {
            inner: slot.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> std::option::Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> std::option::Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// ペイロードへの参照を返すイテレータ。
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(slot: std::option::Option<&'a T>) -> Self {
        Self {
            inner: slot.into_iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> std::option::Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> std::option::Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_slot_yields_once() {
        let mut iter = IntoIter::new(Some(5));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn empty_slot_is_empty() {
        let mut iter = IntoIter::<i32>::new(None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn borrowed_iter_can_be_restarted_by_clone() {
        let value = String::from("payload");
        let iter = Iter::new(Some(&value));
        let copy = iter.clone();

        assert_eq!(iter.collect::<Vec<_>>(), vec![&value]);
        assert_eq!(copy.rev().collect::<Vec<_>>(), vec![&value]);
    }
}
