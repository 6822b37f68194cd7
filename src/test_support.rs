//! Brute-force reference values shared by the unit tests

use std::collections::HashSet;

/// Values of every binary tree whose leaves are exactly `items`
pub fn tree_values(items: &[i32]) -> HashSet<i32> {
    if let [only] = items {
        return HashSet::from([*only]);
    }

    let n = items.len();
    let mut out = HashSet::new();
    for mask in 1..(1u32 << n) - 1 {
        let (left, right): (Vec<(usize, &i32)>, Vec<(usize, &i32)>) = items
            .iter()
            .enumerate()
            .partition(|(j, _)| mask & (1 << j) != 0);
        let left: Vec<i32> = left.into_iter().map(|(_, &v)| v).collect();
        let right: Vec<i32> = right.into_iter().map(|(_, &v)| v).collect();

        let right_values = tree_values(&right);
        for x in tree_values(&left) {
            for &y in &right_values {
                out.insert(x.wrapping_add(y));
                out.insert(x.wrapping_sub(y));
                out.insert(x.wrapping_shl(y as u32));
                out.insert(x.wrapping_shr(y as u32));
            }
        }
    }
    out
}

/// Every value reachable from any non-empty sub-multiset of `numbers`
pub fn brute_force_values(numbers: &[i32]) -> HashSet<i32> {
    let n = numbers.len();
    let mut all = HashSet::new();
    for mask in 1..(1u32 << n) {
        let subset: Vec<i32> = numbers
            .iter()
            .enumerate()
            .filter(|(j, _)| mask & (1 << j) != 0)
            .map(|(_, &v)| v)
            .collect();
        all.extend(tree_values(&subset));
    }
    all
}

/// Whether every number in `used` can be drawn from `available`
pub fn is_sub_multiset(used: &[i32], available: &[i32]) -> bool {
    let mut pool = available.to_vec();
    used.iter().all(|n| {
        if let Some(pos) = pool.iter().position(|m| m == n) {
            pool.swap_remove(pos);
            true
        } else {
            false
        }
    })
}
