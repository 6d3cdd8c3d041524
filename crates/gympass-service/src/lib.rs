//! # gympass-service
//!
//! The operations gympass exposes, on top of the repository ports:
//!
//! - check-in with proximity and one-per-day gates ([`GymPassService::check_in`])
//! - time-boxed validation ([`GymPassService::validate_check_in`])
//! - history and metrics ([`GymPassService::check_in_history`], [`GymPassService::user_metrics`])
//! - gym registration and search ([`GymPassService::create_gym`] and friends)
//!
//! The service holds no state between calls; every record lives in the
//! injected `GymDirectory` and `CheckInLedger`.

pub mod check_in;
pub mod error;
pub mod gyms;
pub mod history;
pub mod policy;
pub mod service;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use error::ServiceError;
pub use policy::CheckInPolicy;
pub use service::GymPassService;
