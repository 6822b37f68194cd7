use log::{debug, warn};

/// A split of a number sequence into two non-empty, order-preserving parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub left: Vec<i32>,
    pub right: Vec<i32>,
}

/// Enumerate two-way partitions with the bit-index scheme.
///
/// Index `i` runs over `1 .. 2^(n-1)`; bit `j` of `i` sends item `j` to the
/// left part, otherwise to the right. The top bit is never set, so the last
/// item always lands on the right, every unordered split appears exactly once
/// and neither side is ever empty.
///
/// A sequence too long for the index to fit in a `usize` yields no
/// partitions.
pub fn generate_partitions(numbers: &[i32]) -> Vec<Partition> {
    let n = numbers.len();
    if n < 2 {
        return Vec::new();
    }

    let Some(half) = u32::try_from(n - 1)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
    else {
        warn!("Cannot index partitions of {} numbers", n);
        return Vec::new();
    };

    let mut result = Vec::new();

    for index in 1..half {
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for (j, &number) in numbers.iter().enumerate() {
            if index & (1 << j) != 0 {
                left.push(number);
            } else {
                right.push(number);
            }
        }
        result.push(Partition { left, right });
    }

    debug!("Generated {} partitions of {:?}", result.len(), numbers);
    result
}
