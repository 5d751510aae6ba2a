//! Alphanumeric-aware ("natural") string ordering: `chr2 < chr10`.

use std::cmp::Ordering;

/// Compare two strings, treating every run of ASCII digits as a number.
///
/// Runs with equal numeric value but different zero padding (`07` vs `7`)
/// fall back to plain byte order so the ordering stays total and consistent
/// with `==`.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (x, y) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < x.len() && j < y.len() {
        if x[i].is_ascii_digit() && y[j].is_ascii_digit() {
            let (si, sj) = (i, j);
            while i < x.len() && x[i].is_ascii_digit() {
                i += 1;
            }
            while j < y.len() && y[j].is_ascii_digit() {
                j += 1;
            }
            let ord = cmp_digit_runs(&x[si..i], &y[sj..j]);
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            match x[i].cmp(&y[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                ord => return ord,
            }
        }
    }

    (x.len() - i)
        .cmp(&(y.len() - j))
        .then_with(|| a.cmp(b))
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    fn strip(s: &[u8]) -> &[u8] {
        let nz = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
        &s[nz..]
    }
    let (a, b) = (strip(a), strip(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(natural_cmp("chr2", "chr10"), Ordering::Less);
        assert_eq!(natural_cmp("chr10", "chr9"), Ordering::Greater);
        assert_eq!(natural_cmp("x100y", "x100z"), Ordering::Less);
    }

    #[test]
    fn prefixes_and_case_are_respected() {
        assert_eq!(natural_cmp("chr", "chr1"), Ordering::Less);
        assert_eq!(natural_cmp("B", "a"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn zero_padding_stays_total() {
        assert_ne!(natural_cmp("07", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("07", "8"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_inflate_runs() {
        assert_eq!(natural_cmp("a007", "a10"), Ordering::Less);
        assert_eq!(natural_cmp("chr0010", "chr9"), Ordering::Greater);
        assert_eq!(natural_cmp("x000", "x0"), Ordering::Greater);
    }

    #[test]
    fn sorting_a_contig_list() {
        let mut v = vec!["chrX", "chr10", "chr1", "chr2", "chr1_random"];
        v.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(v, ["chr1", "chr1_random", "chr2", "chr10", "chrX"]);
    }
}
