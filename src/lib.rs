//! # QuestionGen client
//!
//! Command-line client for the QuestionGen backend: generate question sets,
//! render question-paper and answer-key PDFs, compare AI providers on the
//! same request, and browse diagram templates for visual questions.
//!
//! The backend does all the real work (AI invocation, PDF rendering,
//! persistence, auth issuance); this crate only builds requests, attaches
//! the stored session token as a bearer credential, and hands results back.
//! [`api::ApiClient`] is the single choke point for that HTTP boundary.

pub mod api;
pub mod cli;
pub mod features;
pub mod session;
