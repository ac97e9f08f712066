/// Return true if every element is `<=` its successor.
///
/// Incomparable values (NaN) make the slice unsorted.
pub fn is_ascending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Return true if every element is `>=` its successor.
pub fn is_descending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Index of the first element equal to its successor.
pub fn first_duplicate<T: PartialEq>(values: &[T]) -> Option<usize> {
    values.windows(2).position(|pair| pair[0] == pair[1])
}

/// Number of thresholds `<= value` in an ascending slice.
///
/// This is the bucket index of `value`: zero when it lies below every
/// threshold, `i + 1` when `thresholds[i]` is the greatest threshold it
/// reaches. An exact hit therefore lands in the bucket above the boundary.
pub fn bucket<T: PartialOrd>(thresholds: &[T], value: &T) -> usize {
    thresholds.partition_point(|threshold| threshold <= value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sortedness() {
        assert!(is_ascending(&[1, 2, 2, 3]));
        assert!(!is_ascending(&[3, 1]));
        assert!(is_descending(&[3, 3, 1]));
        assert!(!is_descending(&[1, 3]));

        // Trivially sorted both ways
        assert!(is_ascending::<u8>(&[]));
        assert!(is_descending(&[7]));

        assert!(!is_ascending(&[0.1, f64::NAN, 0.3]));
        assert!(!is_descending(&[0.3, f64::NAN, 0.1]));
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(first_duplicate(&[1, 2, 3]), None);
        assert_eq!(first_duplicate(&[1, 2, 2, 3, 3]), Some(1));
    }

    #[test]
    fn test_bucket_boundaries() {
        let thresholds = [75u8, 170];

        assert_eq!(bucket(&thresholds, &0), 0);
        assert_eq!(bucket(&thresholds, &74), 0);
        assert_eq!(bucket(&thresholds, &75), 1);
        assert_eq!(bucket(&thresholds, &169), 1);
        assert_eq!(bucket(&thresholds, &170), 2);
        assert_eq!(bucket(&thresholds, &255), 2);
    }

    #[test]
    fn test_bucket_without_thresholds() {
        assert_eq!(bucket::<f64>(&[], &0.5), 0);
    }
}
