use crate::domain::{ReferralForm, ReferralSchema, ValidationErrors};
use crate::referral_client::{ReferralClient, SubmissionResult};
use tracing::Instrument;
use uuid::Uuid;

/// Where a single referral attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

impl AttemptState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AttemptState::Invalid | AttemptState::Succeeded | AttemptState::Failed
        )
    }
}

/// How an attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Invalid(ValidationErrors),
    Submitted(SubmissionResult),
}

impl AttemptOutcome {
    pub fn state(&self) -> AttemptState {
        match self {
            AttemptOutcome::Invalid(_) => AttemptState::Invalid,
            AttemptOutcome::Submitted(SubmissionResult::Success) => AttemptState::Succeeded,
            AttemptOutcome::Submitted(SubmissionResult::Failure { .. }) => AttemptState::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state() == AttemptState::Succeeded
    }
}

/// Validates a form and, only if it is valid, hands it to the client.
pub struct ReferralSubmission<'a> {
    client: &'a ReferralClient,
    schema: ReferralSchema,
}

impl<'a> ReferralSubmission<'a> {
    pub fn new(client: &'a ReferralClient, schema: ReferralSchema) -> Self {
        Self { client, schema }
    }

    /// Runs one attempt to completion. A retry is a fresh call with a fresh form.
    pub async fn attempt(&self, form: ReferralForm) -> AttemptOutcome {
        let attempt_id = Uuid::new_v4();
        let attempt_span = tracing::info_span!(
            "Referral attempt",
            %attempt_id,
            course = form.course.as_deref().unwrap_or_default(),
        );
        self.run(form).instrument(attempt_span).await
    }

    async fn run(&self, form: ReferralForm) -> AttemptOutcome {
        let mut state = AttemptState::Idle;
        transition(&mut state, AttemptState::Validating);

        let payload = match form.validate(&self.schema) {
            Ok(payload) => payload,
            Err(errors) => {
                transition(&mut state, AttemptState::Invalid);
                tracing::info!(
                    violations = %errors.styled(self.client.key_style()),
                    "Referral form is invalid."
                );
                return AttemptOutcome::Invalid(errors);
            }
        };

        transition(&mut state, AttemptState::Submitting);
        let outcome = AttemptOutcome::Submitted(self.client.submit(&payload).await);
        transition(&mut state, outcome.state());
        outcome
    }
}

fn transition(state: &mut AttemptState, next: AttemptState) {
    debug_assert!(!state.is_terminal(), "no transition out of {:?}", state);
    tracing::debug!(from = ?state, to = ?next, "Attempt state changed.");
    *state = next;
}
