pub mod configuration;
pub mod domain;
pub mod referral_client;
pub mod submission;
pub mod telemetry;
