/// Number of ways to choose `k` items from `n`.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc = 1;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

/// Iterator over all C(n, K) ways of choosing `K` indices from `0..n`.
///
/// Replaces a `K`-level nested loop. Combinations are generated in
/// lexicographic order, each as an ascending index array.
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, remaining: binomial(n, K) }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.indices;

        // Find the rightmost index that can still move right
        let mut i = K;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

/// Indices of `0..K + R` not in `chosen`. `chosen` must be ascending and distinct,
/// as produced by [`Combinations`].
pub fn complement<const K: usize, const R: usize>(chosen: &[usize; K]) -> [usize; R] {
    let mut out = [0usize; R];
    let mut picked = chosen.iter().peekable();
    let mut next = 0;
    for idx in 0..(K + R) {
        if picked.peek() == Some(&&idx) {
            picked.next();
        } else {
            out[next] = idx;
            next += 1;
        }
    }
    out
}
