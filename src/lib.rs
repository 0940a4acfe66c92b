//! # gemdeck - Gemini Demo Backend Client
//!
//! A small, pragmatic Rust library for a demo backend that fronts a
//! generative-AI API, pairing a typed HTTP client with the form-state layer
//! its pages share.
//!
//! ## Features
//! - Async-first, tokio compatible
//! - One configured transport: env-resolved base URL, JSON defaults,
//!   60-second ceiling, request/response journaling via `tracing`
//! - Typed request/response models for every backend route, including
//!   multipart uploads
//! - One shared request/response/error contract for all pages: local
//!   validation, busy gating, wholesale display replacement, and a single
//!   normalized error string
//!
//! ## Architecture
//!
//! The library has two layers:
//!
//! 1. **[`ApiClient`]** resolves its base URL once at construction and owns
//!    the route methods (`generate_text`, `image_chat`, `analyze_document`,
//!    ...), defined alongside their wire types in [`api`].
//! 2. **Pages** in [`pages`] each own local form state and drive exactly one
//!    request/response cycle per submit. Most are a [`pages::Panel`] around a
//!    [`pages::Form`]; the two chat-style pages append turns to a running
//!    history instead of replacing the display.
//!
//! ## Example
//! ```no_run
//! use gemdeck::client::ApiClient;
//! use gemdeck::pages::TextPage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One client, shared by every page.
//!     let client = ApiClient::from_env()?;
//!
//!     let mut page = TextPage::default();
//!     page.form.prompt = "俳句を一句詠んでください".to_string();
//!     page.submit(&client).await;
//!
//!     match page.output() {
//!         Some(text) => println!("{text}"),
//!         None => eprintln!("{}", page.error().unwrap_or_default()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod http;
pub mod options;
pub mod pages;
pub mod preview;

pub use api::FilePart;
pub use client::{ApiClient, ClientError};
pub use options::{AgentTool, AspectRatio, Resolution};
pub use pages::{Activity, Form, Panel};
