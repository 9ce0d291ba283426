// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports the presentation layer depends on.
//!
//! - Infrastructure implements the [`port`] traits
//! - The UI receives implementations by injection and never names them
//!
//! # Example
//!
//! ```ignore
//! use journal_wall::application::port::EntryActions;
//! use journal_wall::infrastructure::LocalOutbox;
//! use std::sync::Arc;
//!
//! let actions: Arc<dyn EntryActions> = Arc::new(LocalOutbox::new(data_dir));
//! ```

pub mod port;
