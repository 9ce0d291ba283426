// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`outbox`]: pending submissions on the local filesystem (implements
//!   [`EntryActions`])
//!
//! [`EntryActions`]: crate::application::port::EntryActions

pub mod outbox;

pub use outbox::LocalOutbox;
