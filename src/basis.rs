/// `Problem` は法 `modulus` と対象の数列 `values` を表す.
#[derive(Debug, Clone)]
pub(crate) struct Problem {
    pub(crate) modulus: i64,
    pub(crate) values: Vec<i64>,
}

/// `Interval` は元の数列上の 1 始まりの閉区間を表す.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Interval {
    pub(crate) first: usize,
    pub(crate) last: usize,
}

impl std::fmt::Debug for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.first, self.last)
    }
}

impl Interval {
    pub(crate) fn new(first: usize, last: usize) -> Self {
        debug_assert!(1 <= first);
        debug_assert!(first <= last);
        Self { first, last }
    }

    pub(crate) fn len(&self) -> usize {
        self.last - self.first + 1
    }
}
