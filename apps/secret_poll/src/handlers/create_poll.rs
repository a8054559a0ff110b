use log::{debug, info, warn};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::gateway::PollGateway;
use crate::state::Notification;
use crate::wallet::WalletSession;

/// Arguments of a validated `createPoll` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
    pub duration_seconds: u64,
}

/// Draft of a new poll and the submission state around it.
///
/// The draft always holds between 2 and 6 options and a duration of 1 to 168 hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePollForm {
    question: String,
    options: Vec<String>,
    duration_hours: u64,
    submitting: bool,
}

impl Default for CreatePollForm {
    fn default() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
            duration_hours: DEFAULT_DURATION_HOURS,
            submitting: false,
        }
    }
}

impl CreatePollForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn duration_hours(&self) -> u64 {
        self.duration_hours
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn set_duration_hours(&mut self, hours: u64) {
        self.duration_hours = hours.clamp(MIN_DURATION_HOURS, MAX_DURATION_HOURS);
    }

    pub fn can_add_option(&self) -> bool {
        self.options.len() < MAX_OPTIONS
    }

    pub fn can_remove_option(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    /// Appends an empty option, up to six.
    pub fn add_option(&mut self) {
        if self.can_add_option() {
            self.options.push(String::new());
        }
    }

    /// Removes the option at `index`, never going below two.
    pub fn remove_option(&mut self, index: usize) {
        if self.can_remove_option() && index < self.options.len() {
            self.options.remove(index);
        }
    }

    pub fn update_option(&mut self, index: usize, text: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            *option = text.into();
        }
    }

    fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && self.options.iter().all(|o| !o.trim().is_empty())
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    /// Checks the preconditions of a submission and builds the contract arguments.
    pub fn validate(&self, session: &WalletSession) -> Result<CreatePollRequest, ErrorCode> {
        if !session.is_connected() {
            return Err(ErrorCode::NotConnected);
        }
        if !self.is_complete() {
            return Err(ErrorCode::Validation);
        }
        if self.submitting {
            return Err(ErrorCode::AlreadySubmitting);
        }

        Ok(CreatePollRequest {
            question: self.question.trim().to_string(),
            options: self
                .options
                .iter()
                .filter(|o| !o.trim().is_empty())
                .cloned()
                .collect(),
            duration_seconds: self.duration_hours * SECONDS_PER_HOUR,
        })
    }

    /// Submits the draft to the contract.
    ///
    /// The draft is reset after a successful call and kept as entered after a failed
    /// one so the user can retry.
    pub async fn submit<G: PollGateway>(
        &mut self,
        session: &WalletSession,
        gateway: &G,
    ) -> Notification {
        let request = match self.validate(session) {
            Ok(request) => request,
            Err(err) => {
                debug!("create poll rejected: {err}");
                return err.into();
            }
        };

        info!(
            "Creating a new poll with {} options for {}s",
            request.options.len(),
            request.duration_seconds
        );
        self.submitting = true;
        let result = gateway
            .create_poll(request.question, request.options, request.duration_seconds)
            .await;
        self.submitting = false;

        match result {
            Ok(outcome) => {
                info!("Poll created in {:?}", outcome.tx_hash);
                *self = Self::default();
                Notification::success("Poll created successfully!")
            }
            Err(err) => {
                warn!("Error creating poll: {err:?}");
                err.into()
            }
        }
    }
}
