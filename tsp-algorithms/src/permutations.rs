/// Lazy lexicographic enumeration of the orderings of `0..n`.
///
/// A clone continues from the same position on its own.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    fixed: usize,
    done: bool,
}

impl Permutations {
    /// All `n!` orderings.
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            fixed: 0,
            done: false,
        }
    }

    /// Orderings that start at city 0, `(n - 1)!` of them.
    ///
    /// Every closed tour is a rotation of exactly one of these.
    pub fn with_fixed_first(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            fixed: n.min(1),
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !next_permutation(&mut self.current[self.fixed..]);
        Some(item)
    }
}

/// Rearranges `items` into the next lexicographically greater ordering.
///
/// Returns false, leaving `items` sorted ascending, once the last ordering has been passed.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
