//! Fixed sample rows inserted on every reset.
//!
//! Exercises and example queries are written against these exact values, so
//! changing a row here changes the expected answers.

use time::{macros::date, Date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub name: &'static str,
    pub email: &'static str,
    pub city: &'static str,
}

/// An order row. `owner` is the user's display name; the store resolves it to
/// the assigned id after the users are inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedOrder {
    pub owner: &'static str,
    pub amount: f64,
    pub status: &'static str,
    pub created_at: Date,
}

pub const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        name: "Adarsh",
        email: "adarsh@mail.com",
        city: "Goa",
    },
    SeedUser {
        name: "Pranjali",
        email: "pranjali@mail.com",
        city: "Mumbai",
    },
    SeedUser {
        name: "Rahul",
        email: "rahul@mail.com",
        city: "Pune",
    },
    SeedUser {
        name: "Amit",
        email: "amit@mail.com",
        city: "Delhi",
    },
];

pub const SEED_ORDERS: &[SeedOrder] = &[
    SeedOrder {
        owner: "Adarsh",
        amount: 500.0,
        status: "PAID",
        created_at: date!(2026 - 01 - 10),
    },
    SeedOrder {
        owner: "Adarsh",
        amount: 999.0,
        status: "PENDING",
        created_at: date!(2026 - 01 - 11),
    },
    SeedOrder {
        owner: "Pranjali",
        amount: 1299.0,
        status: "PAID",
        created_at: date!(2026 - 01 - 11),
    },
    SeedOrder {
        owner: "Rahul",
        amount: 2500.0,
        status: "CANCELLED",
        created_at: date!(2026 - 01 - 12),
    },
    SeedOrder {
        owner: "Amit",
        amount: 799.0,
        status: "PAID",
        created_at: date!(2026 - 01 - 12),
    },
    SeedOrder {
        owner: "Pranjali",
        amount: 1500.0,
        status: "PENDING",
        created_at: date!(2026 - 01 - 13),
    },
    SeedOrder {
        owner: "Rahul",
        amount: 1800.0,
        status: "PAID",
        created_at: date!(2026 - 01 - 13),
    },
];

/// Formats a date the way `created_at` is stored.
pub fn date_to_str(d: Date) -> String {
    format!("{:04}-{:02}-{:02}", d.year(), d.month() as u8, d.day())
}
