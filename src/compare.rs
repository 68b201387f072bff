//! Order independent comparison of header parameter collections.

use smallvec::SmallVec;

/// Returns true if `x` and `y` hold the same elements with the same multiplicities, in any
/// order.
///
/// `None` and an empty slice compare equal.
///
/// # Examples
/// ```
/// use actix_header::are_equal;
///
/// assert!(are_equal(Some(&[1, 2, 2][..]), Some(&[2, 1, 2][..])));
/// assert!(!are_equal(Some(&[1, 2][..]), Some(&[1, 1][..])));
/// assert!(are_equal::<u8>(None, Some(&[])));
/// ```
pub fn are_equal<T: PartialEq>(x: Option<&[T]>, y: Option<&[T]>) -> bool {
    are_equal_by(x, y, |a, b| a == b)
}

/// Like [`are_equal`], using `eq` to compare elements.
///
/// Each element of `x` is matched against the first element of `y` that is equal and not yet
/// matched. Runs in O(n·m), which is fine for the handful of parameters a header carries.
pub fn are_equal_by<T, U, F>(x: Option<&[T]>, y: Option<&[U]>, mut eq: F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    let x = x.unwrap_or_default();
    let y = y.unwrap_or_default();

    if x.len() != y.len() {
        return false;
    }

    let mut used: SmallVec<[bool; 16]> = SmallVec::from_elem(false, y.len());

    'outer: for a in x {
        for (b, used) in y.iter().zip(used.iter_mut()) {
            if !*used && eq(a, b) {
                *used = true;
                continue 'outer;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiset_semantics() {
        assert!(are_equal(Some(&[1, 2, 2][..]), Some(&[2, 1, 2][..])));
        assert!(!are_equal(Some(&[1, 2][..]), Some(&[1, 1][..])));
        assert!(!are_equal(Some(&[1, 1][..]), Some(&[1, 2][..])));
        assert!(!are_equal(Some(&[1, 2, 2][..]), Some(&[1, 1, 2][..])));
        assert!(!are_equal(Some(&[1][..]), Some(&[1, 1][..])));
    }

    #[test]
    fn empty_and_none() {
        assert!(are_equal::<i32>(None, None));
        assert!(are_equal::<i32>(None, Some(&[])));
        assert!(are_equal::<i32>(Some(&[]), None));
        assert!(!are_equal(None, Some(&[1][..])));
    }

    #[test]
    fn custom_comparer() {
        let x = ["Charset", "Q"];
        let y = ["q", "charset"];

        assert!(!are_equal(Some(&x[..]), Some(&y[..])));
        assert!(are_equal_by(Some(&x[..]), Some(&y[..]), |a, b| {
            a.eq_ignore_ascii_case(b)
        }));
    }

    #[test]
    fn many_elements_spill() {
        let x: Vec<u32> = (0..40).collect();
        let y: Vec<u32> = (0..40).rev().collect();
        assert!(are_equal(Some(&x[..]), Some(&y[..])));
    }
}
