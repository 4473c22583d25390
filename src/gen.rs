//! Synthetic inputs for benchmarks and repeat-heavy tests.

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad \
minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea \
commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit \
esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat \
non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. ";

/// The fibonacci word of the given order: f(0) = "b", f(1) = "a",
/// f(i) = f(i-1) ++ f(i-2). Dense in tandem repeats.
pub fn fibonacci_word(order: usize) -> String {
    match order {
        0 => "b".to_owned(),
        1 => "a".to_owned(),
        _ => {
            let mut prev = "b".to_owned();
            let mut cur = "a".to_owned();
            for _ in 2 ..= order {
                let next = cur.clone() + &prev;
                prev = cur;
                cur = next;
            }
            cur
        }
    }
}

/// Lorem-ipsum filler repeated out to exactly `len` bytes. ASCII only, so
/// slicing at arbitrary byte offsets is safe.
pub fn lipsum(len: usize) -> String {
    let mut out = String::with_capacity(len);
    while out.len() < len {
        let take = (len - out.len()).min(LOREM.len());
        out.push_str(&LOREM[.. take]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fibonacci_words() {
        assert_eq!(fibonacci_word(0), "b");
        assert_eq!(fibonacci_word(1), "a");
        assert_eq!(fibonacci_word(2), "ab");
        assert_eq!(fibonacci_word(3), "aba");
        assert_eq!(fibonacci_word(4), "abaab");
        assert_eq!(fibonacci_word(5), "abaababa");
    }

    #[test]
    fn fibonacci_lengths() {
        // |f(i)| follows the fibonacci numbers
        let lens: Vec<usize> = (0 .. 10).map(|i| fibonacci_word(i).len()).collect();
        assert_eq!(lens, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn lipsum_is_exact_length() {
        assert_eq!(lipsum(0).len(), 0);
        assert_eq!(lipsum(10).len(), 10);
        assert_eq!(lipsum(5000).len(), 5000);
        assert!(lipsum(40).starts_with("Lorem ipsum"));
    }
}
