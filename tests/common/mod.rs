//! Shared fixtures for directory tests.
#![allow(dead_code)]

use user_directory::{UserId, UserRecord};

pub const IVAN_ID: UserId = 1;
pub const PETR_ID: UserId = 2;

/// Initialize test logging. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// First fixture user.
pub fn ivan() -> UserRecord {
    UserRecord::new(IVAN_ID, "Ivan", "123")
}

/// Second fixture user.
pub fn petr() -> UserRecord {
    UserRecord::new(PETR_ID, "Petr", "456")
}
