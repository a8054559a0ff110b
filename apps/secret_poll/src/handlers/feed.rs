use log::info;

use crate::display::partition;
use crate::gateway::{GatewayResult, PollGateway};
use crate::state::{Poll, Tab};

/// Poll feed split into active and closed tabs.
///
/// The feed does not discover polls on its own; callers hand it a collection or a
/// list of known ids to read.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    polls: Vec<Poll>,
    tab: Tab,
}

impl Feed {
    pub fn new(polls: Vec<Poll>) -> Self {
        Self {
            polls,
            tab: Tab::Active,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    /// Polls of the selected tab, in feed order.
    pub fn display_polls(&self) -> Vec<&Poll> {
        let (active, closed) = partition(&self.polls);
        match self.tab {
            Tab::Active => active,
            Tab::Closed => closed,
        }
    }

    pub fn active_count(&self) -> usize {
        self.polls.iter().filter(|p| p.is_active).count()
    }

    pub fn closed_count(&self) -> usize {
        self.polls.len() - self.active_count()
    }

    /// Copy shown when the selected tab has no polls.
    pub fn empty_message(&self) -> &'static str {
        match self.tab {
            Tab::Active => "No active polls found. Create the first encrypted poll to get started!",
            Tab::Closed => "No closed polls found. Closed polls will appear here once voting ends.",
        }
    }

    /// Replaces the collection with fresh reads of `ids`.
    ///
    /// The first failed read aborts the refresh and keeps the previous collection.
    pub async fn refresh<G: PollGateway>(
        &mut self,
        gateway: &G,
        ids: &[u64],
        now: u64,
    ) -> GatewayResult<()> {
        let mut polls = Vec::with_capacity(ids.len());
        for &id in ids {
            let info = gateway.get_poll_info(id).await?;
            polls.push(Poll::from_info(id, info, now));
        }

        info!("Loaded {} polls", polls.len());
        self.polls = polls;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ethers::types::{Address, U256};

    use super::*;
    use crate::error::{Action, ErrorCode};
    use crate::sample::sample_polls;
    use crate::state::PollInfo;
    use crate::testing::FakeGateway;

    fn info(question: &str, is_closed: bool) -> PollInfo {
        PollInfo {
            question: question.to_string(),
            options: vec!["yes".to_string(), "no".to_string()],
            total_votes: 1,
            is_active: !is_closed,
            is_closed,
            creator: Address::repeat_byte(0x33),
            start_time: U256::zero(),
            end_time: U256::from(7_200u64),
        }
    }

    #[test]
    fn tabs_show_stable_subsets() {
        let mut feed = Feed::new(sample_polls());

        assert_eq!(feed.tab(), Tab::Active);
        assert_eq!(feed.active_count(), 2);
        assert_eq!(feed.closed_count(), 1);
        let ids: Vec<u64> = feed.display_polls().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);

        feed.select(Tab::Closed);
        let ids: Vec<u64> = feed.display_polls().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn empty_tab_has_message() {
        let mut feed = Feed::new(Vec::new());
        assert!(feed.display_polls().is_empty());
        assert!(feed.empty_message().starts_with("No active polls"));

        feed.select(Tab::Closed);
        assert!(feed.empty_message().starts_with("No closed polls"));
    }

    #[tokio::test]
    async fn refresh_reads_known_ids() {
        let gateway = FakeGateway::default();
        gateway.polls.borrow_mut().extend([
            (1, info("first", false)),
            (2, info("second", true)),
        ]);
        let mut feed = Feed::default();

        feed.refresh(&gateway, &[1, 2], 0).await.unwrap();

        assert_eq!(feed.polls().len(), 2);
        assert_eq!(feed.display_polls()[0].question, "first");
        assert_eq!(feed.display_polls()[0].time_left, "2h left");
        feed.select(Tab::Closed);
        assert_eq!(feed.display_polls()[0].question, "second");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_polls() {
        let gateway = FakeGateway::default();
        gateway.polls.borrow_mut().push((1, info("first", false)));
        let mut feed = Feed::new(sample_polls());

        let err = feed.refresh(&gateway, &[1, 99], 0).await.unwrap_err();

        assert!(matches!(
            err,
            ErrorCode::RemoteCall {
                action: Action::ReadPoll,
                ..
            }
        ));
        assert_eq!(feed.polls(), sample_polls().as_slice());
    }
}
