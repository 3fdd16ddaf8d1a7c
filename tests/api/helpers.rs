use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use once_cell::sync::Lazy;
use referral_core::configuration::get_configuration;
use referral_core::domain::{KeyStyle, ReferralForm, ReferralSchema};
use referral_core::referral_client::ReferralClient;
use referral_core::submission::{AttemptOutcome, ReferralSubmission};
use referral_core::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "referral_test".to_string();
    // set up logging for the test run
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to install the test subscriber.");
    } else {
        // use std::io::sink to consume the log data silently
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to install the test subscriber.");
    };
});

pub struct TestApp {
    pub referral_server: MockServer,
    pub client: ReferralClient,
    pub schema: ReferralSchema,
    pub key_style: KeyStyle,
}

impl TestApp {
    pub async fn attempt(&self, form: ReferralForm) -> AttemptOutcome {
        ReferralSubmission::new(&self.client, self.schema)
            .attempt(form)
            .await
    }

    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.referral_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_schema(ReferralSchema::default()).await
}

pub async fn spawn_app_with_schema(schema: ReferralSchema) -> TestApp {
    Lazy::force(&TRACING);

    let referral_server = MockServer::start().await;

    let mut configurations = get_configuration().expect("Failed to read configuration");
    configurations.referral_client.endpoint = format!("{}/referral", referral_server.uri());
    configurations.referral_client.timeout_milliseconds = 500;

    let key_style = configurations.referral_client.key_style;
    let client = configurations
        .referral_client
        .client()
        .expect("Failed to build the referral client.");

    TestApp {
        referral_server,
        client,
        schema,
        key_style,
    }
}

pub fn valid_form() -> ReferralForm {
    ReferralForm {
        referrer_name: Some(Name().fake()),
        referrer_email: Some(SafeEmail().fake()),
        referrer_phone: Some("+1 (555) 000-0000".into()),
        referee_name: Some(Name().fake()),
        referee_email: Some(SafeEmail().fake()),
        referee_phone: Some("+44 20 7946 0958".into()),
        course: Some("web-development".into()),
        message: Some("Thought of you when I saw this".into()),
    }
}
