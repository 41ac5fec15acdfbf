//! Risk decisions and warm-up schedules for domains that want to start sending email.
//!
//! The [`vetting`] module turns externally collected reputation signals into a [`vetting::RiskSummary`],
//! and the [`warmup`] module produces day-by-day sending limits for an accepted domain. Neither
//! module performs network I/O; lookups belong to the callers that assemble the signals.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod vetting;
pub mod warmup;
