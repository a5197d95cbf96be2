//! Code ordering
//!
//! Action codes mix letters and digits ("CMOR1", "UPL3", "A10"). The annual
//! schedule orders them numeric-aware, so "A2" sorts before "A10" instead of
//! after it. Letter comparison is case-insensitive; a raw byte comparison
//! breaks exact ties to keep the ordering total.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Numeric-aware, case-insensitive comparison of two action codes.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use farming_agreement_core::calc::natural_code_cmp;
///
/// assert_eq!(natural_code_cmp("A2", "A10"), Ordering::Less);
/// assert_eq!(natural_code_cmp("UPL3", "CMOR1"), Ordering::Greater);
/// ```
pub fn natural_code_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(lc), Some(rc)) => {
                if lc.is_ascii_digit() && rc.is_ascii_digit() {
                    let ln = take_number(&mut left);
                    let rn = take_number(&mut right);
                    match ln.cmp(&rn) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match lc.to_ascii_lowercase().cmp(&rc.to_ascii_lowercase()) {
                        Ordering::Equal => {
                            left.next();
                            right.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

/// Consume a run of ASCII digits as one number.
fn take_number(chars: &mut Peekable<Chars>) -> u128 {
    let mut value: u128 = 0;
    while let Some(c) = chars.peek().copied() {
        match c.to_digit(10) {
            Some(digit) => {
                value = value.saturating_mul(10).saturating_add(digit as u128);
                chars.next();
            }
            None => break,
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs_compare_numerically() {
        assert_eq!(natural_code_cmp("A2", "A10"), Ordering::Less);
        assert_eq!(natural_code_cmp("A10", "A2"), Ordering::Greater);
        assert_eq!(natural_code_cmp("A10", "A10"), Ordering::Equal);
    }

    #[test]
    fn test_letters_compare_case_insensitively() {
        assert_eq!(natural_code_cmp("cmor1", "UPL3"), Ordering::Less);
        assert_eq!(natural_code_cmp("BND1", "bnd2"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_tie_break_on_raw_bytes() {
        // "A02" and "A2" carry the same number; the ordering stays total
        assert_ne!(natural_code_cmp("A02", "A2"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_code_cmp("UPL", "UPL3"), Ordering::Less);
    }

    #[test]
    fn test_sorting_a_code_list() {
        let mut codes = vec!["UPL10", "A10", "CMOR1", "A2", "UPL3"];
        codes.sort_by(|a, b| natural_code_cmp(a, b));
        assert_eq!(codes, vec!["A2", "A10", "CMOR1", "UPL3", "UPL10"]);
    }
}
