//! Group size planning.
//!
//! Computes the ordered group sizes for a roster of `total` members and a
//! target group size.
//!
//! # Policies
//!
//! | Policy | Rule | 7 members, size 3 |
//! |--------|------|-------------------|
//! | Exact | `total / target` full groups, then the remainder (if any) | `[3, 3, 1]` |
//! | Balanced | `ceil(total / target)` groups, sizes differ by at most 1 | `[3, 2, 2]` |

use serde::{Deserialize, Serialize};

use crate::models::SizeSequence;

/// Group size rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupSizePolicy {
    /// Full groups of the target size plus one trailing remainder group.
    /// The remainder may hold a single member.
    Exact,
    /// Fewest groups not exceeding the target size, as even as possible.
    #[default]
    Balanced,
}

impl GroupSizePolicy {
    /// Maps the `balance` switch to a policy.
    pub fn from_balance(balance: bool) -> Self {
        if balance {
            Self::Balanced
        } else {
            Self::Exact
        }
    }
}

/// Plans group sizes for `total` members with target size `target`.
///
/// Expects `2 <= target <= total`. Returns an empty sequence when either
/// argument is zero. Never produces a zero-size group.
///
/// # Example
/// ```
/// use u_group::planning::{plan_sizes, GroupSizePolicy};
///
/// assert_eq!(plan_sizes(7, 3, GroupSizePolicy::Balanced).as_slice(), &[3, 2, 2]);
/// assert_eq!(plan_sizes(7, 3, GroupSizePolicy::Exact).as_slice(), &[3, 3, 1]);
/// ```
pub fn plan_sizes(total: usize, target: usize, policy: GroupSizePolicy) -> SizeSequence {
    if total == 0 || target == 0 {
        return SizeSequence::default();
    }
    match policy {
        GroupSizePolicy::Exact => exact_sizes(total, target),
        GroupSizePolicy::Balanced => balanced_sizes(total, target),
    }
}

fn exact_sizes(total: usize, target: usize) -> SizeSequence {
    let full_groups = total / target;
    let remainder = total % target;
    let mut sizes = vec![target; full_groups];
    if remainder > 0 {
        sizes.push(remainder);
    }
    SizeSequence::new(sizes)
}

fn balanced_sizes(total: usize, target: usize) -> SizeSequence {
    let group_count = total.div_ceil(target);
    let base = total / group_count;
    let remainder = total % group_count;
    let sizes = (0..group_count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect();
    SizeSequence::new(sizes)
}
