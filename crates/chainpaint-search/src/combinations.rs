//! Subset enumeration.
//!
//! [`Combinations`] walks the `k`-subsets of `0..n` in lexicographic order,
//! one index slice at a time, without materializing the whole list.

/// Returns the binomial coefficient `C(n, k)`, saturating at [`u64::MAX`].
///
/// # Examples
///
/// ```
/// use chainpaint_search::combinations::binomial;
///
/// assert_eq!(binomial(5, 2), 10);
/// assert_eq!(binomial(48, 12), 69_668_534_468);
/// assert_eq!(binomial(3, 4), 0);
/// ```
#[must_use]
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // exact at every step: acc is C(n, i) before the update
        acc = acc * (n - i) as u128 / (i + 1) as u128;
    }
    u64::try_from(acc).unwrap_or(u64::MAX)
}

/// Returns the number of subsets of an `n`-element set whose size lies in
/// `min..=max`.
#[must_use]
pub fn pattern_count(n: usize, min: usize, max: usize) -> u64 {
    (min..=max.min(n)).fold(0_u64, |acc, k| acc.saturating_add(binomial(n, k)))
}

/// Lexicographic enumeration of the `k`-subsets of `0..n`.
///
/// This is a lending iterator: each call to
/// [`next_combination`](Self::next_combination) borrows the generator's
/// index buffer, so it does not implement [`Iterator`].
///
/// # Examples
///
/// ```
/// use chainpaint_search::combinations::Combinations;
///
/// let mut combinations = Combinations::new(4, 2);
/// let mut seen = vec![];
/// while let Some(indices) = combinations.next_combination() {
///     seen.push(indices.to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], [0, 1]);
/// assert_eq!(seen[5], [2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

impl Combinations {
    /// Creates a generator for the `k`-subsets of `0..n`.
    ///
    /// Yields nothing when `k > n`, and a single empty subset when `k == 0`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            state: if k > n { State::Done } else { State::Fresh },
        }
    }

    /// Returns the number of elements picked per subset.
    #[must_use]
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    /// Advances to the next subset and returns its sorted indices.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Done => return None,
            State::Fresh => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(&self.indices)
    }

    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}
