//! Comparison sorts over mutable slices.
//!
//! Classic in-place algorithms, plus the joke ones:
//!
//! | sort      | comparisons | swaps       | notes                        |
//! |-----------|-------------|-------------|------------------------------|
//! | insertion | O(n^2)      | O(n^2)      | adaptive, stable             |
//! | selection | O(n^2)      | O(n)        | not stable                   |
//! | quick     | O(n log n)* | O(n log n)* | Lomuto partition, last pivot |
//! | bogo      | unbounded   | unbounded   | shuffle until sorted         |
//! | bozo      | unbounded   | unbounded   | random swaps until sorted    |
//!
//! *expected; O(n^2) worst case on already-sorted input.
//!
//! The randomized sorts take their generator as a parameter, so callers
//! can seed them. They terminate with probability 1 but have no time
//! bound; keep them to tiny inputs.

use rand::Rng;

/// Fisher-Yates shuffle, walking from the back of the slice.
pub fn shuffle<T, R: Rng>(a: &mut [T], rng: &mut R) {
    for i in (0..a.len()).rev() {
        let j = rng.gen_range(0..=i);
        a.swap(i, j);
    }
}

/// Insertion sort: swap each element backwards until its predecessor is
/// no larger.
pub fn insertion_sort<T: Ord>(a: &mut [T]) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j - 1] > a[j] {
            a.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Selection sort: swap the minimum of the unsorted suffix into place.
pub fn selection_sort<T: Ord>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }
    for i in 0..a.len() - 1 {
        let mut min = i;
        for j in i + 1..a.len() {
            if a[j] < a[min] {
                min = j;
            }
        }
        a.swap(i, min);
    }
}

/// Quicksort with a Lomuto partition around the last element.
pub fn quick_sort<T: Ord>(a: &mut [T]) {
    if a.len() < 2 {
        return;
    }
    let p = partition(a);
    let (front, rest) = a.split_at_mut(p);
    quick_sort(front);
    quick_sort(&mut rest[1..]);
}

/// Partition around the last element; returns its final position.
/// Elements at or below the pivot end up before it.
fn partition<T: Ord>(a: &mut [T]) -> usize {
    let hi = a.len() - 1;
    let mut i = 0;
    for j in 0..hi {
        if a[j] <= a[hi] {
            a.swap(i, j);
            i += 1;
        }
    }
    a.swap(i, hi);
    return i;
}

/// Bogosort: reshuffle the whole slice until it comes up sorted.
pub fn bogo_sort<T: Ord, R: Rng>(a: &mut [T], rng: &mut R) {
    while !a.is_sorted() {
        shuffle(a, rng);
    }
}

/// Bozosort: swap two random positions until the slice is sorted.
pub fn bozo_sort<T: Ord, R: Rng>(a: &mut [T], rng: &mut R) {
    while !a.is_sorted() {
        let i = rng.gen_range(0..a.len());
        let j = rng.gen_range(0..a.len());
        a.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // ==========================================================
    // deterministic sorts
    // ==========================================================

    fn check_sort(sort: fn(&mut [i32])) {
        let cases: Vec<Vec<i32>> = vec![
            vec![],
            vec![1],
            vec![2, 1],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
            vec![7, 7, 7, 7],
        ];
        for case in cases {
            let mut got = case.clone();
            sort(&mut got);
            let mut want = case.clone();
            want.sort_unstable();
            assert_eq!(got, want, "input: {case:?}");
        }
    }

    #[test]
    fn insertion_sorts() {
        check_sort(insertion_sort::<i32>);
    }

    #[test]
    fn selection_sorts() {
        check_sort(selection_sort::<i32>);
    }

    #[test]
    fn quick_sorts() {
        check_sort(quick_sort::<i32>);
    }

    #[test]
    fn sorts_agree_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x605);
        for _ in 0..50 {
            let len = rng.gen_range(0..64);
            let case: Vec<i32> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            let mut want = case.clone();
            want.sort_unstable();
            for sort in [
                insertion_sort::<i32> as fn(&mut [i32]),
                selection_sort::<i32>,
                quick_sort::<i32>,
            ] {
                let mut got = case.clone();
                sort(&mut got);
                assert_eq!(got, want, "input: {case:?}");
            }
        }
    }

    // ==========================================================
    // randomized sorts
    // ==========================================================

    #[test]
    fn shuffle_permutes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut a = [1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut a, &mut rng);
        let mut sorted = a;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut b = [1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut a, &mut StdRng::seed_from_u64(7));
        shuffle(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn bogo_sorts_tiny_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = [4, 2, 5, 1, 3];
        bogo_sort(&mut a, &mut rng);
        assert_eq!(a, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn bozo_sorts_tiny_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = [3, 1, 2];
        bozo_sort(&mut a, &mut rng);
        assert_eq!(a, [1, 2, 3]);
    }
}
