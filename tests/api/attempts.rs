use referral_core::domain::{ReferralField, ReferralForm, ReferralSchema};
use referral_core::submission::{AttemptOutcome, AttemptState};
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with_schema, valid_form};

#[tokio::test]
async fn an_invalid_form_never_reaches_the_endpoint() {
    let test_app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.referral_server)
        .await;

    let test_cases = vec![
        (
            ReferralForm {
                referrer_email: Some("not-an-email".into()),
                ..valid_form()
            },
            "invalid referrer email",
        ),
        (
            ReferralForm {
                referee_name: Some("J".into()),
                ..valid_form()
            },
            "one-letter friend name",
        ),
        (
            ReferralForm {
                course: None,
                ..valid_form()
            },
            "no course",
        ),
        (ReferralForm::default(), "empty form"),
    ];

    for (form, description) in test_cases {
        let outcome = test_app.attempt(form).await;

        assert_eq!(
            AttemptState::Invalid,
            outcome.state(),
            "The attempt was not rejected locally when the form had {}",
            description
        );
    }
}

#[tokio::test]
async fn an_empty_form_reports_every_required_field_at_once() {
    let test_app = spawn_app().await;

    let outcome = test_app.attempt(ReferralForm::default()).await;

    let AttemptOutcome::Invalid(errors) = outcome else {
        panic!("Expected the empty form to be rejected.");
    };
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![
            ReferralField::ReferrerName,
            ReferralField::ReferrerEmail,
            ReferralField::RefereeName,
            ReferralField::RefereeEmail,
            ReferralField::Course,
        ]
    );
}

#[tokio::test]
async fn phone_numbers_are_required_and_sent_when_collected() {
    let test_app = spawn_app_with_schema(ReferralSchema {
        collect_phone_numbers: true,
    })
    .await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.referral_server)
        .await;

    let missing_phone = ReferralForm {
        referee_phone: None,
        ..valid_form()
    };
    let outcome = test_app.attempt(missing_phone).await;
    let AttemptOutcome::Invalid(errors) = outcome else {
        panic!("Expected a missing phone number to be rejected.");
    };
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![ReferralField::RefereePhone]
    );

    let outcome = test_app.attempt(valid_form()).await;
    assert!(outcome.is_success());

    let bodies = test_app.received_bodies().await;
    assert_eq!(bodies[0]["referrerPhone"], "+1 (555) 000-0000");
}
