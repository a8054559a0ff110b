//! Derived values for rendering polls. Everything here is pure.

use serde::Serialize;

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::state::{Poll, PollOption};

/// Share of `total_votes` held by `votes`, rounded to the nearest percent.
///
/// Returns 0 when no votes have been cast.
pub fn vote_percentage(votes: u64, total_votes: u64) -> u64 {
    if total_votes == 0 {
        return 0;
    }
    // Integer form of round(votes / total * 100), halves round up; u128 holds
    // the products for any pair of u64 counts
    let (votes, total) = (u128::from(votes), u128::from(total_votes));
    let percent = (votes * 200 + total) / (total * 2);
    u64::try_from(percent).unwrap_or(u64::MAX)
}

/// Percentage for an option, or `None` while its count is hidden.
pub fn option_percentage(option: &PollOption, poll: &Poll) -> Option<u64> {
    if poll.is_active {
        return None;
    }
    option
        .votes
        .map(|votes| vote_percentage(votes, poll.total_votes))
}

/// Stable split of `polls` into (active, closed).
pub fn partition(polls: &[Poll]) -> (Vec<&Poll>, Vec<&Poll>) {
    polls.iter().partition(|poll| poll.is_active)
}

/// Remaining-time label for a poll ending at unix time `end_time`.
pub fn time_left(is_active: bool, end_time: u64, now: u64) -> String {
    if !is_active {
        return "Closed".to_string();
    }

    let remaining = end_time.saturating_sub(now);
    if remaining >= SECONDS_PER_DAY {
        format!("{}d left", remaining / SECONDS_PER_DAY)
    } else if remaining >= SECONDS_PER_HOUR {
        format!("{}h left", remaining / SECONDS_PER_HOUR)
    } else if remaining >= 60 {
        format!("{}m left", remaining / 60)
    } else if remaining > 0 {
        "<1m left".to_string()
    } else {
        "Ending".to_string()
    }
}

pub fn status_label(poll: &Poll) -> &'static str {
    if poll.is_active {
        "Encrypting"
    } else {
        "Revealed"
    }
}

/// Render state of one option control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: String,
    pub text: String,
    pub interactive: bool,
    /// (votes, percent), only for a revealed poll
    pub result: Option<(u64, u64)>,
}

pub fn option_views(poll: &Poll, voting_disabled: bool) -> Vec<OptionView> {
    poll.options
        .iter()
        .map(|option| OptionView {
            id: option.id.clone(),
            text: option.text.clone(),
            interactive: !voting_disabled,
            result: option_percentage(option, poll)
                .zip(option.votes)
                .map(|(percent, votes)| (votes, percent)),
        })
        .collect()
}
