use std::fmt;
use std::marker::PhantomData;

pub struct Max<T>(PhantomData<fn(&T)>);
impl<T> Default for Max<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}
impl<T> Clone for Max<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Max<T> {}
impl<T> fmt::Debug for Max<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Max")
    }
}
impl<T> Max<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct Min<T>(PhantomData<fn(&T)>);
impl<T> Default for Min<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}
impl<T> Clone for Min<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Min<T> {}
impl<T> fmt::Debug for Min<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Min")
    }
}
impl<T> Min<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A strict preference between two values of `T`.
///
/// `favors(a, b)` is true when `a` should win over `b`. It need not be a total
/// order; when neither side is favored the two are treated as tied.
pub trait Comparator<T: ?Sized> {
    fn favors(&self, a: &T, b: &T) -> bool;

    /// Returns `b` only if it is strictly favored over `a`, so ties keep `a`.
    fn favored<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.favors(b, a) {
            b
        } else {
            a
        }
    }
}

impl<T: PartialOrd> Comparator<T> for Max<T> {
    fn favors(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: PartialOrd> Comparator<T> for Min<T> {
    fn favors(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn favors(&self, a: &T, b: &T) -> bool {
        (**self).favors(a, b)
    }
}

/// Adapts a `(candidate, contender) -> bool` closure, which answers "should
/// the contender replace the candidate", into a [`Comparator`].
#[derive(Clone, Copy)]
pub struct Prefers<F>(F);

impl<F> Prefers<F> {
    pub fn new(prefers: F) -> Self {
        Self(prefers)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for Prefers<F> {
    fn favors(&self, a: &T, b: &T) -> bool {
        (self.0)(b, a)
    }
}

impl<F> fmt::Debug for Prefers<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Prefers(..)")
    }
}

/// Compares values by a projected key.
#[derive(Clone, Copy)]
pub struct ByKey<F, C> {
    key: F,
    compare: C,
}

impl<F, C> ByKey<F, C> {
    pub fn new(key: F, compare: C) -> Self {
        Self { key, compare }
    }
}

impl<K, F> ByKey<F, Max<K>> {
    pub fn max(key: F) -> Self {
        Self::new(key, Max::default())
    }
}

impl<K, F> ByKey<F, Min<K>> {
    pub fn min(key: F) -> Self {
        Self::new(key, Min::default())
    }
}

impl<T: ?Sized, K, F, C> Comparator<T> for ByKey<F, C>
where
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn favors(&self, a: &T, b: &T) -> bool {
        self.compare.favors(&(self.key)(a), &(self.key)(b))
    }
}

impl<F, C: fmt::Debug> fmt::Debug for ByKey<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey")
            .field("compare", &self.compare)
            .finish_non_exhaustive()
    }
}

/// Flips the inner comparator: `a` is favored whenever the inner one favors `b`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn favors(&self, a: &T, b: &T) -> bool {
        self.0.favors(b, a)
    }
}

/// Replace the candidate when the contender is smaller. Selects the minimum.
pub fn prefers_min<T: PartialOrd + ?Sized>(candidate: &T, contender: &T) -> bool {
    candidate > contender
}

/// Replace the candidate when the contender is larger. Selects the maximum.
pub fn prefers_max<T: PartialOrd + ?Sized>(candidate: &T, contender: &T) -> bool {
    candidate < contender
}
