// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! License information notifications.
//!
//! After a license is chosen the engine can mail the chooser a summary with
//! the suggested HTML. This crate composes that message; delivery belongs to
//! whatever implements [`NotificationSender`] (an SMTP relay, a queue, a test
//! inbox).
//!
//! # Example
//!
//! ```
//! use cc_server_notify::{compose_license_info, NotifyConfig};
//!
//! let config = NotifyConfig::default();
//! let notification = compose_license_info(
//!     &config,
//!     "Creative Commons Attribution 4.0 International",
//!     "<a href=\"https://creativecommons.org/licenses/by/4.0/\">CC BY 4.0</a>",
//!     "author@example.org",
//! )
//! .unwrap();
//!
//! assert_eq!(notification.subject, "Your Creative Commons License Information");
//! assert_eq!(notification.to_header(), "author@example.org");
//! ```

mod config;
mod error;
mod license_info;
mod notification;

pub use config::{NotifyConfig, DEFAULT_FROM_ADDRESS};
pub use error::NotifyError;
pub use license_info::{compose_license_info, send_license_info, LICENSE_INFO_SUBJECT};
pub use notification::{send_notification, Notification, NotificationSender};
