//! Word storage: an inline pair for values below `2^128`, a shared heap array,
//! or a window into an array owned by another value.

use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use crate::big_num_constants::*;
use super::BigUint;

#[derive(Clone)]
pub(crate) enum Storage {
    /// `[low, high]`, unused words are zero.
    Inline([Word; 2]),
    /// Trimmed words, least significant first. Copied on the first write while shared.
    Array(Arc<Vec<Word>>),
    /// The trimmed window `words[start..end]`. Never written through.
    Slice { words: Arc<Vec<Word>>, start: usize, end: usize },
}

/// The storage form a value currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Inline,
    Array,
    Slice { start: usize, end: usize },
}

#[inline]
fn inline_len(pair: &[Word; 2]) -> usize {
    if pair[1] != 0 {
        2
    } else if pair[0] != 0 {
        1
    } else {
        0
    }
}

/// Length of `words` without its high zero words.
#[inline]
pub(crate) fn significant_len(words: &[Word]) -> usize {
    words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

// 实现构造
impl BigUint {
    pub const fn zero() -> Self {
        BigUint { storage: Storage::Inline([0, 0]) }
    }

    pub const fn one() -> Self {
        Self::from_word(1)
    }

    pub const fn from_word(word: Word) -> Self {
        BigUint { storage: Storage::Inline([word, 0]) }
    }

    pub const fn from_low_high(low: Word, high: Word) -> Self {
        BigUint { storage: Storage::Inline([low, high]) }
    }

    /// Builds a value from little-endian words. High zero words are dropped.
    pub fn from_words(words: &[Word]) -> Self {
        match significant_len(words) {
            0 => Self::zero(),
            1 => Self::from_word(words[0]),
            2 => Self::from_low_high(words[0], words[1]),
            len => BigUint { storage: Storage::Array(Arc::new(words[..len].to_vec())) },
        }
    }

    pub(crate) fn from_vec(mut words: Vec<Word>) -> Self {
        let len = significant_len(&words);
        match len {
            0..=2 => Self::from_words(&words[..len]),
            _ => {
                words.truncate(len);
                BigUint { storage: Storage::Array(Arc::new(words)) }
            }
        }
    }

    #[inline]
    pub(crate) fn from_double(value: DoubleWord) -> Self {
        Self::from_low_high(value as Word, (value >> WORD_BITS) as Word)
    }

    /// The value as a double word, if it is stored inline.
    #[inline]
    pub(crate) fn inline_double(&self) -> Option<DoubleWord> {
        match self.storage {
            Storage::Inline([low, high]) => Some(((high as DoubleWord) << WORD_BITS) | low as DoubleWord),
            _ => None,
        }
    }

    /// The value as a double word, if it has at most two words.
    #[inline]
    pub(crate) fn to_double(&self) -> Option<DoubleWord> {
        match self.words() {
            [] => Some(0),
            [low] => Some(*low as DoubleWord),
            [low, high] => Some(((*high as DoubleWord) << WORD_BITS) | *low as DoubleWord),
            _ => None,
        }
    }
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<Word>> for BigUint {
    fn from(words: Vec<Word>) -> Self {
        Self::from_vec(words)
    }
}

// 实现存储访问
impl BigUint {
    /// The significant words, least significant first.
    pub fn words(&self) -> &[Word] {
        match &self.storage {
            Storage::Inline(pair) => &pair[..inline_len(pair)],
            Storage::Array(words) => &words[..],
            Storage::Slice { words, start, end } => &words[*start..*end],
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        match &self.storage {
            Storage::Inline(pair) => inline_len(pair),
            Storage::Array(words) => words.len(),
            Storage::Slice { start, end, .. } => end - start,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.count() == 0
    }

    /// Word `index`, or zero above the stored words.
    #[inline]
    pub fn word(&self, index: usize) -> Word {
        self.words().get(index).copied().unwrap_or(0)
    }

    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline(_) => 2,
            Storage::Array(words) => words.capacity(),
            Storage::Slice { start, end, .. } => end - start,
        }
    }

    pub fn representation(&self) -> Representation {
        match &self.storage {
            Storage::Inline(_) => Representation::Inline,
            Storage::Array(_) => Representation::Array,
            Storage::Slice { start, end, .. } => Representation::Slice { start: *start, end: *end },
        }
    }

    pub fn into_words(self) -> Vec<Word> {
        match self.storage {
            Storage::Array(words) => Arc::try_unwrap(words).unwrap_or_else(|shared| (*shared).clone()),
            _ => self.words().to_vec(),
        }
    }
}

// 实现存储修改
impl BigUint {
    /// Sets word `index`. An inline value that outgrows its two words moves to
    /// an array, a slice is copied out first.
    pub fn set_word(&mut self, index: usize, word: Word) {
        if let Storage::Inline(pair) = &mut self.storage {
            if index < 2 {
                pair[index] = word;
                return;
            }
        }
        if word == 0 && index >= self.count() {
            return;
        }
        let words = self.words_mut();
        if index >= words.len() {
            words.resize(index + 1, 0);
        }
        words[index] = word;
        self.trim();
    }

    /// Makes room for `minimum` words. Inline values are left alone.
    pub fn reserve_capacity(&mut self, minimum: usize) {
        if let Storage::Inline(_) = self.storage {
            return;
        }
        let words = self.words_mut();
        if minimum > words.len() {
            words.reserve(minimum - words.len());
        }
    }

    /// Turns the storage into an exclusively owned array.
    pub fn ensure_owned_array(&mut self) {
        let owned = match &mut self.storage {
            Storage::Array(words) => {
                Arc::make_mut(words);
                return;
            }
            Storage::Inline(pair) => pair[..inline_len(pair)].to_vec(),
            Storage::Slice { words, start, end } => words[*start..*end].to_vec(),
        };
        self.storage = Storage::Array(Arc::new(owned));
    }

    /// Exclusive access to the word buffer. Callers that can leave high zero
    /// words behind must call `trim` afterwards.
    pub(crate) fn words_mut(&mut self) -> &mut Vec<Word> {
        self.ensure_owned_array();
        match &mut self.storage {
            Storage::Array(words) => Arc::make_mut(words),
            _ => unreachable!("storage was just materialized"),
        }
    }

    pub(crate) fn trim(&mut self) {
        if let Storage::Array(words) = &mut self.storage {
            if words.last() == Some(&0) {
                let words = Arc::make_mut(words);
                let len = significant_len(words);
                words.truncate(len);
            }
        }
    }

    /// Resets to zero, keeping an owned buffer for reuse.
    pub fn clear(&mut self) {
        if let Storage::Array(words) = &mut self.storage {
            if let Some(words) = Arc::get_mut(words) {
                words.clear();
                return;
            }
        }
        *self = Self::zero();
    }

    /// Replaces the value with `value`, reusing the owned buffer when there is one.
    pub fn load(&mut self, value: &BigUint) {
        if let Storage::Array(words) = &mut self.storage {
            if let Some(words) = Arc::get_mut(words) {
                words.clear();
                words.extend_from_slice(value.words());
                return;
            }
        }
        *self = value.clone();
    }
}

// 实现切片
impl BigUint {
    /// The value formed by words `range`. Out of range bounds are clamped, high
    /// zero words of the window are dropped and an array source is shared
    /// rather than copied.
    pub fn extract<R: RangeBounds<usize>>(&self, range: R) -> BigUint {
        let count = self.count();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => count,
        }
        .min(count);
        if start >= end {
            return Self::zero();
        }
        let words = self.words();
        let end = start + significant_len(&words[start..end]);
        if end - start <= 2 {
            return Self::from_words(&words[start..end]);
        }
        let storage = match &self.storage {
            Storage::Array(buffer) if start == 0 && end == buffer.len() => Storage::Array(buffer.clone()),
            Storage::Array(buffer) => Storage::Slice { words: buffer.clone(), start, end },
            Storage::Slice { words: buffer, start: offset, .. } => Storage::Slice {
                words: buffer.clone(),
                start: offset + start,
                end: offset + end,
            },
            Storage::Inline(_) => return Self::from_words(&words[start..end]),
        };
        BigUint { storage }
    }

    /// Split point used by `low`, `high` and the Karatsuba split.
    #[inline]
    pub(crate) fn middle_index(&self) -> usize {
        (self.count() + 1) / 2
    }

    pub fn low(&self) -> BigUint {
        self.extract(..self.middle_index())
    }

    pub fn high(&self) -> BigUint {
        self.extract(self.middle_index()..)
    }

    /// `(high, low)` halves, split at `(count + 1) / 2` words.
    pub fn split(&self) -> (BigUint, BigUint) {
        (self.high(), self.low())
    }
}

#[test]
fn test_init_trims_words() {
    let b = BigUint::from_words(&[1, 2, 0, 0]);
    assert_eq!(b.words(), &[1, 2]);
    assert_eq!(b.representation(), Representation::Inline);

    let b = BigUint::from_words(&[1, 2, 3, 0]);
    assert_eq!(b.words(), &[1, 2, 3]);
    assert_eq!(b.representation(), Representation::Array);

    assert!(BigUint::from_words(&[0, 0, 0]).is_zero());
    assert_eq!(BigUint::from(vec![0, 0, 7, 0]).words(), &[0, 0, 7]);
    assert_eq!(BigUint::from_low_high(0, 5).count(), 2);
}

#[test]
fn test_word_access() {
    let b = BigUint::from_words(&[1, 2, 3]);
    assert_eq!(b.word(0), 1);
    assert_eq!(b.word(2), 3);
    assert_eq!(b.word(3), 0);
    assert_eq!(b.word(1000), 0);
    assert_eq!(BigUint::zero().word(0), 0);
}

#[test]
fn test_set_word() {
    let mut b = BigUint::zero();
    b.set_word(0, 7);
    assert_eq!(b.words(), &[7]);
    assert_eq!(b.representation(), Representation::Inline);

    b.set_word(3, 1);
    assert_eq!(b.words(), &[7, 0, 0, 1]);
    assert_eq!(b.representation(), Representation::Array);

    b.set_word(3, 0);
    assert_eq!(b.words(), &[7]);
    assert_eq!(b.representation(), Representation::Array);

    b.set_word(10, 0);
    assert_eq!(b.words(), &[7]);

    let mut inline = BigUint::from_low_high(1, 2);
    inline.set_word(1, 0);
    assert_eq!(inline.words(), &[1]);
    inline.set_word(0, 0);
    assert!(inline.is_zero());
}

#[test]
fn test_set_word_on_slice_copies_out() {
    let source = BigUint::from_words(&[1, 2, 3, 4, 5, 6]);
    let mut slice = source.extract(1..5);
    assert_eq!(slice.representation(), Representation::Slice { start: 1, end: 5 });
    slice.set_word(0, 9);
    assert_eq!(slice.words(), &[9, 3, 4, 5]);
    assert_eq!(slice.representation(), Representation::Array);
    assert_eq!(source.words(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_copy_on_write() {
    let original = BigUint::from_words(&[1, 2, 3]);
    let mut copy = original.clone();
    copy.set_word(0, 100);
    assert_eq!(original.words(), &[1, 2, 3]);
    assert_eq!(copy.words(), &[100, 2, 3]);
}

#[test]
fn test_extract() {
    let value = BigUint::from_words(&[1, 2, 3, 4, 5, 6, 0, 7]);

    assert_eq!(value.extract(0..100).representation(), Representation::Array);
    assert_eq!(value.extract(0..100).words(), value.words());
    assert!(value.extract(100..).is_zero());
    assert!(value.extract(3..3).is_zero());

    assert_eq!(value.extract(1..3).words(), &[2, 3]);
    assert_eq!(value.extract(1..3).representation(), Representation::Inline);

    // high zero words inside the window are dropped
    assert_eq!(value.extract(4..7).words(), &[5, 6]);

    let slice = value.extract(2..8);
    assert_eq!(slice.words(), &[3, 4, 5, 6, 0, 7]);
    assert_eq!(slice.representation(), Representation::Slice { start: 2, end: 8 });

    let nested = slice.extract(1..5);
    assert_eq!(nested.words(), &[4, 5, 6]);
    assert_eq!(nested.representation(), Representation::Slice { start: 3, end: 6 });
}

#[test]
fn test_low_high_split() {
    let value = BigUint::from_words(&[0, 1, 2, 3]);
    assert_eq!(value.low().words(), &[0, 1]);
    assert_eq!(value.high().words(), &[2, 3]);

    let value = BigUint::from_words(&[0, 1, 2, 3, 4]);
    let (high, low) = value.split();
    assert_eq!(low.words(), &[0, 1, 2]);
    assert_eq!(high.words(), &[3, 4]);

    let (high, low) = BigUint::from_word(9).split();
    assert_eq!(low.words(), &[9]);
    assert!(high.is_zero());
}

#[test]
fn test_clear_and_load() {
    let mut b = BigUint::from_words(&[1, 2, 3, 4]);
    let capacity = b.capacity();
    b.clear();
    assert!(b.is_zero());
    assert_eq!(b.capacity(), capacity);

    b.load(&BigUint::from_words(&[5, 6, 7]));
    assert_eq!(b.words(), &[5, 6, 7]);
    assert_eq!(b.capacity(), capacity);

    let mut inline = BigUint::from_word(3);
    inline.load(&BigUint::from_words(&[5, 6, 7]));
    assert_eq!(inline.words(), &[5, 6, 7]);
}

#[test]
fn test_reserve_capacity() {
    let mut inline = BigUint::from_word(1);
    inline.reserve_capacity(100);
    assert_eq!(inline.representation(), Representation::Inline);

    let mut array = BigUint::from_words(&[1, 2, 3]);
    array.reserve_capacity(100);
    assert!(array.capacity() >= 100);
    assert_eq!(array.words(), &[1, 2, 3]);
}
