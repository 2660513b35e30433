use std::cmp::Ordering;

/// A three-way comparison between two values of type `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a [`Comparator`], so callers can pass a closure where
/// the ordering is not the natural one.
pub trait Comparator<T: ?Sized> {
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation, smallest first
#[derive(Debug, Default, Clone, Copy)]
pub struct MinComparator;

impl<T> Comparator<T> for MinComparator
where
    T: Ord + ?Sized,
{
    #[inline(always)]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by their [`Ord`] implementation, largest first
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxComparator;

impl<T> Comparator<T> for MaxComparator
where
    T: Ord + ?Sized,
{
    #[inline(always)]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        assert_eq!(Comparator::cmp(&by_len, "ab", "abc"), Ordering::Less);
        assert_eq!(Comparator::cmp(&by_len, "xy", "ab"), Ordering::Equal);
    }

    #[test]
    fn min_and_max() {
        assert_eq!(Comparator::<i32>::cmp(&MinComparator, &1, &2), Ordering::Less);
        assert_eq!(Comparator::<i32>::cmp(&MaxComparator, &1, &2), Ordering::Greater);
        assert_eq!(Comparator::<str>::cmp(&MinComparator, "b", "a"), Ordering::Greater);
    }
}
