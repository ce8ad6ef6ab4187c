// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Errors that can occur while composing or dispatching a notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
	/// A sender or recipient address is not a valid email address.
	#[error("invalid email address: {0}")]
	Address(String),

	/// The notification has no recipients.
	#[error("notification has no recipients")]
	NoRecipients,

	/// The message could not be assembled.
	#[error("failed to build message: {0}")]
	Build(String),

	/// The sender failed to deliver the notification.
	#[error("send failed: {0}")]
	Send(String),
}
