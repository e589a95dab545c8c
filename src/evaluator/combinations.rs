/// Number of 5-card subsets of an `n`-card set.
pub const fn choose_five(n: usize) -> usize {
    if n < 5 {
        return 0;
    }
    n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120
}

/// Iterator over every 5-index combination drawn from `0..n`, in lexicographic order.
///
/// For `n < 5` the iterator is empty; for Hold'em inputs `n <= 7`, so at most
/// C(7,5) = 21 combinations are produced.
#[derive(Debug, Clone)]
pub struct FiveOf {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveOf {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveOf {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // rightmost index that still has room to move
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(choose_five(self.n)))
        }
    }
}
