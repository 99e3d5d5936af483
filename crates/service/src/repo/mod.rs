//! Repository implementations.
//!
//! `seaorm` is the production store (Postgres, or SQLite for tests);
//! `memory` keeps the tables in process and backs unit tests and examples.

pub mod memory;
pub mod seaorm;
