use std::fmt;
use std::str::FromStr;

use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::display::time_left;

/// A poll as rendered by the client.
///
/// Polls are created and mutated only by the contract; the client re-reads them and
/// never edits one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    /// Contract poll id
    pub id: u64,
    pub question: String,
    /// Between 2 and 6 options, in creation order
    pub options: Vec<PollOption>,
    /// True while the voting window is open
    pub is_active: bool,
    /// Not decomposable into per-option counts while the poll is active
    pub total_votes: u64,
    /// Display only, derived from the end time
    pub time_left: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    /// Unique within the parent poll
    pub id: String,
    pub text: String,
    /// Revealed count, only present once the poll has closed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub votes: Option<u64>,
}

/// Decoded `getPollInfo` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollInfo {
    pub question: String,
    pub options: Vec<String>,
    pub total_votes: u8,
    pub is_active: bool,
    pub is_closed: bool,
    pub creator: Address,
    pub start_time: U256,
    pub end_time: U256,
}

impl From<(String, Vec<String>, u8, bool, bool, Address, U256, U256)> for PollInfo {
    fn from(
        (question, options, total_votes, is_active, is_closed, creator, start_time, end_time): (
            String,
            Vec<String>,
            u8,
            bool,
            bool,
            Address,
            U256,
            U256,
        ),
    ) -> Self {
        Self {
            question,
            options,
            total_votes,
            is_active,
            is_closed,
            creator,
            start_time,
            end_time,
        }
    }
}

/// Option ids are the poll id followed by a letter: `1a`, `1b`, ...
///
/// Past `z` the letter gives way to a numeric suffix (`1.26`) so ids stay unique.
pub fn option_id(poll_id: u64, index: usize) -> String {
    match u8::try_from(index) {
        Ok(index) if index < 26 => format!("{poll_id}{}", (b'a' + index) as char),
        _ => format!("{poll_id}.{index}"),
    }
}

fn saturating_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

impl Poll {
    /// Builds the display model of a poll read from the contract at unix time `now`.
    ///
    /// `getPollInfo` exposes no per-option counts, so every option is left hidden.
    pub fn from_info(id: u64, info: PollInfo, now: u64) -> Self {
        let is_active = info.is_active && !info.is_closed;
        let options = info
            .options
            .into_iter()
            .enumerate()
            .map(|(index, text)| PollOption {
                id: option_id(id, index),
                text,
                votes: None,
            })
            .collect();

        Self {
            id,
            question: info.question,
            options,
            is_active,
            total_votes: u64::from(info.total_votes),
            time_left: time_left(is_active, saturating_u64(info.end_time), now),
            creator: format!("{:?}", info.creator),
        }
    }

    /// Position of the option with the given id.
    pub fn option_index(&self, option_id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.id == option_id)
    }
}

/// Feed subset selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Active,
    Closed,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Active => f.write_str("active"),
            Tab::Closed => f.write_str("closed"),
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Tab::Active),
            "closed" => Ok(Tab::Closed),
            other => Err(format!("unknown tab `{other}`, use: active, closed")),
        }
    }
}
