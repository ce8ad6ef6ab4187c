// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::{Address, Message};
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// A plain text message addressed to one or more recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
	pub from: String,
	pub to: Vec<String>,
	pub subject: String,
	pub body: String,
}

impl Notification {
	/// Create a notification, validating every address.
	///
	/// # Errors
	///
	/// Returns [`NotifyError::Address`] for an invalid sender or recipient and
	/// [`NotifyError::NoRecipients`] if `to` is empty.
	pub fn new<I, T>(
		from: impl Into<String>,
		to: I,
		subject: impl Into<String>,
		body: impl Into<String>,
	) -> Result<Self, NotifyError>
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		let from = from.into();
		parse_address(&from)?;

		let to: Vec<String> = to.into_iter().map(Into::into).collect();
		if to.is_empty() {
			return Err(NotifyError::NoRecipients);
		}
		for recipient in &to {
			parse_address(recipient)?;
		}

		Ok(Self {
			from,
			to,
			subject: subject.into(),
			body: body.into(),
		})
	}

	/// Recipients as they appear in a `To:` header.
	pub fn to_header(&self) -> String {
		self.to.join(", ")
	}

	/// Build an RFC 5322 message for senders that speak SMTP.
	///
	/// # Errors
	///
	/// Returns [`NotifyError::Address`] if an address is invalid or
	/// [`NotifyError::Build`] if the message cannot be assembled.
	pub fn to_message(&self) -> Result<Message, NotifyError> {
		let mut builder = Message::builder()
			.from(Mailbox::new(None, parse_address(&self.from)?))
			.subject(self.subject.as_str())
			.header(ContentType::TEXT_PLAIN);

		for recipient in &self.to {
			builder = builder.to(Mailbox::new(None, parse_address(recipient)?));
		}

		builder
			.body(self.body.clone())
			.map_err(|e| NotifyError::Build(format!("{e}")))
	}
}

fn parse_address(address: &str) -> Result<Address, NotifyError> {
	address
		.parse()
		.map_err(|e| NotifyError::Address(format!("{address}: {e}")))
}

/// Something that can deliver notifications.
///
/// Implementations own transport concerns (SMTP relays, queues, test
/// inboxes); this crate only composes what they carry.
#[async_trait]
pub trait NotificationSender: Send + Sync {
	async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Dispatch a notification through `sender`.
#[tracing::instrument(
	name = "send_notification",
	skip(sender, notification),
	fields(to = %notification.to_header(), subject = %notification.subject)
)]
pub async fn send_notification<S>(sender: &S, notification: &Notification) -> Result<(), NotifyError>
where
	S: NotificationSender + ?Sized,
{
	if let Err(e) = sender.send(notification).await {
		tracing::warn!(error = %e, "notification was not delivered");
		return Err(e);
	}

	tracing::info!("notification sent");
	Ok(())
}
