//! Anya Harness: canned worlds and a scenario runner for the search engine.
//!
//! Worlds implement [`ExpansionPolicy`](anya_search::ExpansionPolicy) over
//! explicit data; the runner drives one engine per scenario and packages the
//! outcome, statistics and optional trace as JSON reports.
//!
//! The harness does NOT implement search logic. It delegates to
//! `anya_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;
