//! Application layer containing the session state machine and command dispatch.
//!
//! `CartSession` enforces the login and cart rules, and `dispatch` maps a parsed
//! `Command` onto the matching session operation without touching any I/O.

pub mod command;
pub mod session;
