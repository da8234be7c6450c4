//! SeaORM entities mirroring the pre-existing `users` table.

pub mod user;
