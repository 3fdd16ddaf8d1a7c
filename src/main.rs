use std::io::Read;

use anyhow::Context;
use referral_core::{
    configuration::get_configuration,
    domain::ReferralForm,
    referral_client::SubmissionResult,
    submission::{AttemptOutcome, ReferralSubmission},
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the logger
    let subscriber = get_subscriber("referral".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let configurations = get_configuration().context("Failed to read configuration.")?;

    let mut raw_form = String::new();
    std::io::stdin()
        .read_to_string(&mut raw_form)
        .context("Failed to read the referral form from stdin.")?;
    let form: ReferralForm =
        serde_json::from_str(&raw_form).context("The referral form is not a JSON object of strings.")?;

    let client = configurations
        .referral_client
        .client()
        .context("Failed to build the referral HTTP client.")?;
    let submission = ReferralSubmission::new(&client, configurations.schema);

    match submission.attempt(form).await {
        AttemptOutcome::Invalid(errors) => {
            for (field, messages) in errors.field_messages(client.key_style()) {
                for message in messages {
                    println!("{field}: {message}");
                }
            }
            std::process::exit(2);
        }
        AttemptOutcome::Submitted(SubmissionResult::Failure { message }) => {
            println!("{message}");
            std::process::exit(1);
        }
        AttemptOutcome::Submitted(SubmissionResult::Success) => {
            println!("Referral submitted");
        }
    }

    Ok(())
}
