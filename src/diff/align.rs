//! Sequence alignment via longest-common-subsequence.
//!
//! One DP engine serves both alignment strategies the differ needs: object
//! key lists (matched by key equality) and array elements (matched by
//! structural equality). The match predicate is a parameter, the table and
//! backtrace are shared.

/// One alignment decision, in left-to-right order.
///
/// Indices refer back into the input slices, so callers can recover the
/// matched elements without the aligner cloning anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignStep {
    /// `x[left]` and `y[right]` matched.
    Common { left: usize, right: usize },
    /// `y[right]` is present only in the right sequence.
    Add { right: usize },
    /// `x[left]` is present only in the left sequence.
    Remove { left: usize },
}

/// Align two sequences under a match predicate.
///
/// Classic O(|x|*|y|) dynamic-programming LCS with a deterministic
/// backtrace. The table is local to this call and dropped on return; for a
/// tree diff the total footprint is the sum of per-level tables, never one
/// global table.
///
/// The tie-break is load-bearing: when `c[i][j-1] >= c[i-1][j]` the
/// backtrace emits an `Add` rather than a `Remove`, which fixes the output
/// order whenever several alignments are equally long. Reordering tests and
/// downstream renderers rely on it.
pub fn align<K, F>(x: &[K], y: &[K], matches: F) -> Vec<AlignStep>
where
    F: Fn(&K, &K) -> bool,
{
    let c = lcs_table(x, y, &matches);

    // Backtrace from (|x|, |y|). Emitting in reverse and flipping at the
    // end gives the same left-to-right order as the recursive formulation
    // without consuming call stack.
    let mut steps = Vec::with_capacity(x.len().max(y.len()));
    let (mut i, mut j) = (x.len(), y.len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && matches(&x[i - 1], &y[j - 1]) {
            steps.push(AlignStep::Common {
                left: i - 1,
                right: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || c[i][j - 1] >= c[i - 1][j]) {
            steps.push(AlignStep::Add { right: j - 1 });
            j -= 1;
        } else {
            steps.push(AlignStep::Remove { left: i - 1 });
            i -= 1;
        }
    }
    steps.reverse();
    steps
}

/// Build the `(|x|+1) x (|y|+1)` LCS length table.
///
/// `c[i][j]` is the length of the longest common aligned subsequence of the
/// first `i` elements of `x` and the first `j` elements of `y`; row 0 and
/// column 0 stay zero.
fn lcs_table<K, F>(x: &[K], y: &[K], matches: &F) -> Vec<Vec<usize>>
where
    F: Fn(&K, &K) -> bool,
{
    let mut c = vec![vec![0usize; y.len() + 1]; x.len() + 1];
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            c[i][j] = if matches(&x[i - 1], &y[j - 1]) {
                c[i - 1][j - 1] + 1
            } else {
                c[i - 1][j].max(c[i][j - 1])
            };
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: &i32, b: &i32) -> bool {
        a == b
    }

    #[test]
    fn test_empty_sequences() {
        assert!(align::<i32, _>(&[], &[], eq).is_empty());
        assert_eq!(
            align(&[], &[1, 2], eq),
            vec![AlignStep::Add { right: 0 }, AlignStep::Add { right: 1 }]
        );
        assert_eq!(
            align(&[1, 2], &[], eq),
            vec![AlignStep::Remove { left: 0 }, AlignStep::Remove { left: 1 }]
        );
    }

    #[test]
    fn test_identical_sequences() {
        let steps = align(&[1, 2, 3], &[1, 2, 3], eq);
        assert_eq!(
            steps,
            vec![
                AlignStep::Common { left: 0, right: 0 },
                AlignStep::Common { left: 1, right: 1 },
                AlignStep::Common { left: 2, right: 2 },
            ]
        );
    }

    #[test]
    fn test_interleaved_edit() {
        // [a, b, d] -> [a, c, d]: keep a and d, replace b with c
        let steps = align(&[1, 2, 4], &[1, 3, 4], eq);
        assert_eq!(
            steps,
            vec![
                AlignStep::Common { left: 0, right: 0 },
                AlignStep::Remove { left: 1 },
                AlignStep::Add { right: 1 },
                AlignStep::Common { left: 2, right: 2 },
            ]
        );
    }

    #[test]
    fn test_tie_break_prefers_add() {
        // [1,2] vs [2,1] has two optimal alignments (keep 1 or keep 2).
        // The add-preferred tie-break must deterministically keep 2.
        let steps = align(&[1, 2], &[2, 1], eq);
        assert_eq!(
            steps,
            vec![
                AlignStep::Remove { left: 0 },
                AlignStep::Common { left: 1, right: 0 },
                AlignStep::Add { right: 1 },
            ]
        );
    }

    #[test]
    fn test_custom_predicate() {
        // match case-insensitively
        let x = ["A".to_string(), "b".to_string()];
        let y = ["a".to_string(), "c".to_string()];
        let steps = align(&x, &y, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(
            steps,
            vec![
                AlignStep::Common { left: 0, right: 0 },
                AlignStep::Remove { left: 1 },
                AlignStep::Add { right: 1 },
            ]
        );
    }

    #[test]
    fn test_table_shape() {
        let c = lcs_table(&[1, 2, 3], &[2, 3], &eq);
        assert_eq!(c.len(), 4);
        assert_eq!(c[0].len(), 3);
        assert_eq!(c[3][2], 2, "LCS of [1,2,3] and [2,3] is [2,3]");
    }
}
