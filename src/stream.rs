//! Streaming validation for processing numbers as they arrive.
//!
//! Iterator adapters that validate lazily, so large files or network feeds
//! never have to be held in memory.
//!
//! # Example
//!
//! ```
//! use luhn_validator::stream::ValidateExt;
//!
//! let numbers = vec!["2378", "12378", "4992 7398 716"];
//! let valid_count = numbers
//!     .iter()
//!     .validate_numbers()
//!     .filter(|r| r.succeeded())
//!     .count();
//!
//! assert_eq!(valid_count, 2);
//! ```

use crate::result::ValidationResult;
use crate::validate::validate;

/// Iterator yielding a [`ValidationResult`] per input.
///
/// Created by [`ValidateExt::validate_numbers`].
#[derive(Debug, Clone)]
pub struct ValidateStream<I> {
    inner: I,
}

impl<I> ValidateStream<I> {
    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for ValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ValidationResult;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| validate(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ValidateStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for ValidateStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| validate(s.as_ref()))
    }
}

/// Iterator yielding only the inputs that validate.
///
/// Created by [`ValidateExt::valid_only`].
#[derive(Debug, Clone)]
pub struct ValidOnlyStream<I> {
    inner: I,
}

impl<I, S> Iterator for ValidOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = S;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|s| validate(s.as_ref()).succeeded())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Iterator yielding `(index, result)` pairs.
///
/// Created by [`ValidateExt::validate_indexed`].
#[derive(Debug, Clone)]
pub struct IndexedValidateStream<I> {
    inner: I,
    index: usize,
}

impl<I, S> Iterator for IndexedValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, ValidationResult);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let index = self.index;
            self.index += 1;
            (index, validate(s.as_ref()))
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait adding validation adapters to any iterator.
pub trait ValidateExt: Iterator + Sized {
    /// Validates each number yielded by the iterator.
    fn validate_numbers(self) -> ValidateStream<Self>;

    /// Yields only the inputs that validate, unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use luhn_validator::stream::ValidateExt;
    ///
    /// let valid: Vec<_> = ["2378", "bad", "4992-7398-716"]
    ///     .into_iter()
    ///     .valid_only()
    ///     .collect();
    /// assert_eq!(valid, vec!["2378", "4992-7398-716"]);
    /// ```
    fn valid_only(self) -> ValidOnlyStream<Self>;

    /// Validates with index tracking.
    fn validate_indexed(self) -> IndexedValidateStream<Self>;
}

impl<I: Iterator + Sized> ValidateExt for I {
    #[inline]
    fn validate_numbers(self) -> ValidateStream<Self> {
        ValidateStream { inner: self }
    }

    #[inline]
    fn valid_only(self) -> ValidOnlyStream<Self> {
        ValidOnlyStream { inner: self }
    }

    #[inline]
    fn validate_indexed(self) -> IndexedValidateStream<Self> {
        IndexedValidateStream {
            inner: self,
            index: 0,
        }
    }
}
