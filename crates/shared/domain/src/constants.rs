//! Domain-level constants.
//!
//! These constants define business rules and the records every fresh
//! directory starts with.

// =============================================================================
// Identifiers
// =============================================================================

/// First sequence number handed out by a store
pub const FIRST_USER_ID: u64 = 1;

/// Longest accepted identifier (digits of `u64::MAX`)
pub const MAX_USER_ID_LENGTH: usize = 20;

// =============================================================================
// Seed data
// =============================================================================

/// A record loaded into the directory at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub name: &'static str,
    pub age: i32,
    pub is_married: bool,
}

/// Records every seeded store starts with, in insertion order.
/// They receive ids "1" through "4".
pub const SEED_USERS: [SeedUser; 4] = [
    SeedUser {
        name: "Michael Sanchez",
        age: 31,
        is_married: true,
    },
    SeedUser {
        name: "Sarah Le",
        age: 31,
        is_married: true,
    },
    SeedUser {
        name: "Truffles",
        age: 11,
        is_married: false,
    },
    SeedUser {
        name: "Ginny",
        age: 6,
        is_married: false,
    },
];
