use crate::domain::{KeyStyle, Party, ReferralPayload};
use reqwest::{Client, StatusCode};

pub const FALLBACK_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug)]
pub struct ReferralClient {
    http_client: Client,
    // the service that records referrals for us
    endpoint: String,
    key_style: KeyStyle,
}

/// What the caller gets back from a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure { message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<SubmissionError> for SubmissionResult {
    fn from(error: SubmissionError) -> Self {
        let message = error.to_string();
        SubmissionResult::Failure {
            message: if message.is_empty() {
                FALLBACK_FAILURE_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferralRequest<'a> {
    referrer_name: &'a str,
    referrer_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    referrer_phone: Option<&'a str>,
    #[serde(flatten)]
    referee: RefereeFields<'a>,
    course: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[derive(serde::Serialize)]
#[serde(untagged)]
enum RefereeFields<'a> {
    #[serde(rename_all = "camelCase")]
    Referee {
        referee_name: &'a str,
        referee_email: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        referee_phone: Option<&'a str>,
    },
    #[serde(rename_all = "camelCase")]
    Referred {
        referred_name: &'a str,
        referred_email: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        referred_phone: Option<&'a str>,
    },
}

impl<'a> RefereeFields<'a> {
    fn new(referee: &'a Party, style: KeyStyle) -> Self {
        let name = referee.name.as_ref();
        let email = referee.email.as_ref();
        let phone = referee.phone.as_ref().map(AsRef::as_ref);
        match style {
            KeyStyle::Referee => RefereeFields::Referee {
                referee_name: name,
                referee_email: email,
                referee_phone: phone,
            },
            KeyStyle::Referred => RefereeFields::Referred {
                referred_name: name,
                referred_email: email,
                referred_phone: phone,
            },
        }
    }
}

impl<'a> ReferralRequest<'a> {
    fn new(payload: &'a ReferralPayload, style: KeyStyle) -> Self {
        Self {
            referrer_name: payload.referrer.name.as_ref(),
            referrer_email: payload.referrer.email.as_ref(),
            referrer_phone: payload.referrer.phone.as_ref().map(AsRef::as_ref),
            referee: RefereeFields::new(&payload.referee, style),
            course: payload.course.id(),
            message: payload.message.as_deref(),
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ReferralClient {
    pub fn new(
        endpoint: String,
        key_style: KeyStyle,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
            key_style,
        })
    }

    pub fn key_style(&self) -> KeyStyle {
        self.key_style
    }

    /// Posts the referral once. Never retries.
    #[tracing::instrument(
        name = "Submitting a referral",
        skip_all,
        fields(course = %payload.course.id())
    )]
    pub async fn submit(&self, payload: &ReferralPayload) -> SubmissionResult {
        match self.send(payload).await {
            Ok(()) => {
                tracing::info!("Referral accepted by the endpoint.");
                SubmissionResult::Success
            }
            Err(error) => {
                match &error {
                    SubmissionError::Transport(e) => {
                        tracing::error!(error.cause_chain = ?e, "Failed to reach the referral endpoint.")
                    }
                    SubmissionError::Rejected { status, message } => {
                        tracing::warn!(%status, %message, "Referral rejected by the endpoint.")
                    }
                }
                error.into()
            }
        }
    }

    async fn send(&self, payload: &ReferralPayload) -> Result<(), SubmissionError> {
        let request_body = ReferralRequest::new(payload, self.key_style);

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // any body other than {"error": "<non-empty>"} degrades to the fallback
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());

        Err(SubmissionError::Rejected { status, message })
    }
}
