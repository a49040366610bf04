#![doc(test(attr(deny(warnings))))]

//! Intake Core collects a domestic-helper employer's answers in Chinese or English,
//! keeps the questionnaire consistent as answers change, and serializes it into
//! WhatsApp-sized message segments.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod form;
pub mod locale;
pub mod message;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("intake_core tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
