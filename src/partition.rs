//! Optimal range partitioning: split a sequence into consecutive buckets
//! minimizing the maximum bucket sum.
//!
//! Classic linear-partition dynamic program: `cost[i][j]` is the best
//! achievable maximum bucket sum over the first `i + 1` elements using at
//! most `j` dividers, computed with prefix sums over every possible start of
//! the final bucket. O(n^2 k) time, O(nk) space.

/// Partition `data` into consecutive ranges using at most `max_dividers`
/// dividers, minimizing the biggest range sum.
///
/// Returns the divider positions in ascending order; each divider is the
/// index of the last element of a bucket. Fewer dividers than allowed may
/// be returned when that is already optimal. An empty input yields no
/// dividers.
pub fn partition_range(data: &[i64], max_dividers: usize) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }
    let ranges = max_dividers + 1;

    let mut prefix_sum = vec![0i64; n];
    prefix_sum[0] = data[0];
    for i in 1..n {
        prefix_sum[i] = prefix_sum[i - 1] + data[i];
    }

    // cost[i][j]: minimal max-bucket-sum for data[..=i] with at most j dividers
    // range_end[i][j]: last element index of the bucket preceding the final one
    let mut cost = vec![vec![0i64; ranges]; n];
    let mut range_end = vec![vec![0usize; ranges]; n];

    for j in 0..ranges {
        cost[0][j] = data[0];
    }
    for i in 1..n {
        cost[i][0] = prefix_sum[i];
        for j in 1..ranges {
            cost[i][j] = i64::MAX;
        }
    }

    for i in 1..n {
        for j in 1..ranges {
            for k in 0..i {
                // Final bucket covers (k, i]; the rest solved with one divider less
                let candidate = cost[k][j - 1].max(prefix_sum[i] - prefix_sum[k]);
                if candidate < cost[i][j] {
                    cost[i][j] = candidate;
                    range_end[i][j] = k;
                }
            }
        }
    }

    // Walk the recorded bucket ends backwards to list the dividers
    let mut dividers = Vec::new();
    let mut j = ranges - 1;
    let mut i = n - 1;
    while j > 0 && i > 0 {
        let end = range_end[i][j];
        dividers.push(end);
        i = end;
        j -= 1;
    }
    dividers.reverse();
    dividers
}

/// Maximum bucket sum produced by a divider list, for verification.
#[cfg(test)]
fn max_bucket_sum(data: &[i64], dividers: &[usize]) -> i64 {
    let mut best = i64::MIN;
    let mut start = 0;
    for &end in dividers.iter().chain(std::iter::once(&(data.len() - 1))) {
        let sum: i64 = data[start..=end].iter().sum();
        best = best.max(sum);
        start = end + 1;
    }
    best
}
