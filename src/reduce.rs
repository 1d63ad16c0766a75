use tracing::{debug, trace};

use crate::comparator::{Comparator, Prefers};
use crate::error::EmptyInputError;

/// Reduces `items` to the element picked by `prefers`.
///
/// Starting from the first element, `prefers(candidate, contender)` is called
/// once for every later element, left to right. When it returns true the
/// contender becomes the new candidate. Ties therefore keep whichever element
/// came first, and the returned reference always points into `items`.
///
/// ```
/// use favored::reduce_by;
///
/// assert_eq!(reduce_by(&[12, 2, 3, 4], |a, b| a > b), Ok(&2));
/// assert_eq!(reduce_by(&[12, 2, 3, 4], |a, b| a < b), Ok(&12));
/// ```
pub fn reduce_by<T, F>(items: &[T], prefers: F) -> Result<&T, EmptyInputError>
where
    F: FnMut(&T, &T) -> bool,
{
    let index = position_by(items, prefers)?;
    Ok(&items[index])
}

/// Like [`reduce_by`], with the preference given as a [`Comparator`].
pub fn reduce_with<T, C>(items: &[T], compare: C) -> Result<&T, EmptyInputError>
where
    C: Comparator<T>,
{
    let index = position_with(items, compare)?;
    Ok(&items[index])
}

/// Index of the element [`reduce_by`] would return.
pub fn position_by<T, F>(items: &[T], mut prefers: F) -> Result<usize, EmptyInputError>
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(first) = items.first() else {
        debug!("refusing to reduce an empty slice");
        return Err(EmptyInputError);
    };
    let mut favored = (0, first);
    for (index, item) in items.iter().enumerate().skip(1) {
        if prefers(favored.1, item) {
            favored = (index, item);
        }
    }
    trace!(len = items.len(), index = favored.0, "reduced slice");
    Ok(favored.0)
}

/// Index of the element [`reduce_with`] would return.
pub fn position_with<T, C>(items: &[T], compare: C) -> Result<usize, EmptyInputError>
where
    C: Comparator<T>,
{
    position_by(items, |candidate, contender| compare.favors(contender, candidate))
}

/// Reduction over any iterator, yielding the winning item by value.
pub trait Favored: Iterator + Sized {
    fn favored_by<F>(mut self, mut prefers: F) -> Result<Self::Item, EmptyInputError>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let Some(mut candidate) = self.next() else {
            debug!("refusing to reduce an empty iterator");
            return Err(EmptyInputError);
        };
        let mut seen = 1usize;
        for contender in self {
            seen += 1;
            if prefers(&candidate, &contender) {
                candidate = contender;
            }
        }
        trace!(len = seen, "reduced iterator");
        Ok(candidate)
    }

    fn favored_with<C>(self, compare: C) -> Result<Self::Item, EmptyInputError>
    where
        C: Comparator<Self::Item>,
    {
        self.favored_by(|candidate, contender| compare.favors(contender, candidate))
    }
}

impl<I: Iterator> Favored for I {}

impl<F> Prefers<F> {
    /// Runs [`reduce_by`] with the wrapped closure.
    pub fn reduce<'a, T>(&self, items: &'a [T]) -> Result<&'a T, EmptyInputError>
    where
        F: Fn(&T, &T) -> bool,
    {
        reduce_with(items, self)
    }
}
