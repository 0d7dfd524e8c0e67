//! OTP Settings Module
//!
//! Per-action notification channel preferences: for each named action
//! (e.g. "Withdrawal") whether the OTP goes out via email and/or Whatsapp.

// Public exports
pub mod contract;
pub use contract::{
    client::OtpSettingsApi, error::OtpSettingsError, OperationOutcome, OtpSetting,
    OtpSettingUpdate, UpdateStrategy,
};

pub mod module;
pub use module::OtpSettingsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
