//! Powers of an integer base as a lazy sequence.

/// Yields `1, base, base^2, ...`.
///
/// The sequence ends before a value would overflow `u64`, and also once it
/// stops changing (base 0 yields `1, 0`; base 1 yields `1`).
#[derive(Debug, Clone)]
pub struct Powers {
    base: u64,
    next: Option<u64>,
    previous: Option<u64>,
}

pub fn powers(base: u64) -> Powers {
    Powers {
        base,
        next: Some(1),
        previous: None,
    }
}

/// All powers of `base` not exceeding `limit`.
pub fn powers_up_to(base: u64, limit: u64) -> impl Iterator<Item = u64> {
    powers(base).take_while(move |&power| power <= limit)
}

impl Iterator for Powers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if self.previous == Some(current) {
            self.next = None;
            return None;
        }
        self.previous = Some(current);
        self.next = current.checked_mul(self.base);
        Some(current)
    }
}

impl std::iter::FusedIterator for Powers {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, 70, vec![1, 2, 4, 8, 16, 32, 64])]
    #[case(3, 0, vec![])]
    #[case(3, 1, vec![1])]
    #[case(10, 1000, vec![1, 10, 100, 1000])]
    #[case(1, 100, vec![1])]
    #[case(0, 100, vec![1, 0])]
    fn test_powers_up_to(#[case] base: u64, #[case] limit: u64, #[case] expected: Vec<u64>) {
        assert_eq!(powers_up_to(base, limit).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_powers_stop_before_overflow() {
        let all: Vec<u64> = powers(2).collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all.last(), Some(&(1u64 << 63)));
    }

    #[test]
    fn test_powers_is_lazy_and_resumable() {
        let mut seq = powers(3);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(3));
        assert_eq!(seq.next(), Some(9));
        assert_eq!(seq.take(2).collect::<Vec<_>>(), vec![27, 81]);
    }
}
