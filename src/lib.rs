//! # AS Summarizer
//!
//! A lookup and summary tool for ICAI Accounting Standards (AS), built for
//! CA students. Given a short query ("Summarize AS 10") or an explicit
//! code, it returns a hand-authored summary with real-life examples,
//! exports it as a PDF, and can alternatively ask a remote completion
//! service with a fixed tutor persona.
//!
//! ## Quick Start
//!
//! ```bash
//! asref resolve "Explain AS 12 with example"
//! asref show "AS 10"
//! asref list
//! asref export "AS 1"
//! asref ask "Compare AS 10 and AS 26"   # needs [assistant] config + OPENAI_API_KEY
//! asref serve                           # web form on [server].bind
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`kb`] | Static knowledge base of standards |
//! | [`resolve`] | Query resolution (free text and explicit selection) |
//! | [`export`] | PDF export |
//! | [`assistant`] | Remote completion variant |
//! | [`server`] | HTTP form surface |
//! | [`config`] | TOML configuration parsing |

pub mod assistant;
pub mod config;
pub mod export;
pub mod kb;
pub mod resolve;
pub mod server;
