//! Pure numeric helpers for the multiplex operations.

/// Trial division over `[2, √n]`. Anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    // i <= n / i, not i * i <= n: the product overflows i64 once i passes
    // √i64::MAX for inputs near the top of the range.
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Classic recursive Euclidean algorithm: `gcd(a, 0) = a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Pairwise `lcm(a, b) = a * b / gcd(a, b)`, computed as `a / gcd * b` to
/// postpone overflow. A zero operand collapses the result to 0 rather than
/// dividing by a zero gcd. `None` on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// First `n` Fibonacci numbers. The two seed values are always generated
/// internally and the sequence truncated back to length `n`, so `n = 0`
/// yields an empty sequence and `n = 1` yields `[0]`. `None` on overflow
/// (the 94th term exceeds `u64`).
pub fn fibonacci(n: u64) -> Option<Vec<u64>> {
    let n = n as usize;
    let mut seq: Vec<u64> = vec![0, 1];
    for i in 2..n {
        let next = seq[i - 1].checked_add(seq[i - 2])?;
        seq.push(next);
    }
    seq.truncate(n);
    Some(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_prime_rejects_small_and_composite() {
        for n in [-7, -1, 0, 1, 4, 6, 9, 15, 21, 25, 100] {
            assert!(!is_prime(n), "{n} is not prime");
        }
    }

    #[test]
    fn is_prime_accepts_primes() {
        for n in [2, 3, 5, 7, 11, 13, 17, 97, 7919] {
            assert!(is_prime(n), "{n} is prime");
        }
    }

    #[test]
    fn is_prime_survives_the_top_of_the_i64_range() {
        // Largest prime below 2^63; the √n bound check must not overflow.
        assert!(is_prime(9_223_372_036_854_775_783));
        assert!(!is_prime(9_223_372_036_854_775_782));
    }

    #[test]
    fn gcd_euclidean_cases() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn lcm_pairwise_cases() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(6, 4), Some(12));
        assert_eq!(lcm(7, 13), Some(91));
        assert_eq!(lcm(0, 5), Some(0));
        assert_eq!(lcm(0, 0), Some(0));
    }

    #[test]
    fn lcm_detects_overflow() {
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn fold_is_order_invariant() {
        let folded = |values: &[u64]| values.iter().copied().reduce(gcd);
        assert_eq!(folded(&[12, 18, 24]), folded(&[24, 12, 18]));

        let lcm_folded = |values: &[u64]| {
            let mut iter = values.iter().copied();
            let first = iter.next().unwrap();
            iter.try_fold(first, lcm)
        };
        assert_eq!(lcm_folded(&[2, 3, 4]), Some(12));
        assert_eq!(lcm_folded(&[2, 3, 4]), lcm_folded(&[4, 2, 3]));
    }

    #[test]
    fn fibonacci_lengths_and_recurrence() {
        assert_eq!(fibonacci(0).unwrap(), Vec::<u64>::new());
        assert_eq!(fibonacci(1).unwrap(), vec![0]);
        assert_eq!(fibonacci(2).unwrap(), vec![0, 1]);
        assert_eq!(fibonacci(5).unwrap(), vec![0, 1, 1, 2, 3]);

        let seq = fibonacci(30).unwrap();
        assert_eq!(seq.len(), 30);
        for i in 2..seq.len() {
            assert_eq!(seq[i], seq[i - 1] + seq[i - 2]);
        }
    }

    #[test]
    fn fibonacci_overflow_is_detected() {
        assert!(fibonacci(93).is_some());
        assert!(fibonacci(94).is_none());
    }
}
