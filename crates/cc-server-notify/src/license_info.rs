// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The "your license information" message sent after a license is chosen.

use crate::config::NotifyConfig;
use crate::error::NotifyError;
use crate::notification::{send_notification, Notification, NotificationSender};

/// Subject line of license information notifications.
pub const LICENSE_INFO_SUBJECT: &str = "Your Creative Commons License Information";

fn license_info_body(license_name: &str, license_html: &str, signature: &str) -> String {
	format!(
		"Thank you for using a Creative Commons legal tool for your work.

You have selected {license_name}.
You should include a reference to this on the web page that includes
the work in question.

Here is the suggested HTML:

{license_html}

Tips for marking your work can be found at
http://wiki.creativecommons.org/Marking.  Information on the supplied HTML and
metadata can be found at http://wiki.creativecommons.org/CC_REL.

Thank you!
Creative Commons Support
{signature}"
	)
}

/// Compose the license information message for `recipient`.
///
/// # Errors
///
/// Returns [`NotifyError::Address`] if `recipient` or the configured sender
/// address is invalid.
pub fn compose_license_info(
	config: &NotifyConfig,
	license_name: &str,
	license_html: &str,
	recipient: &str,
) -> Result<Notification, NotifyError> {
	Notification::new(
		config.from_address.as_str(),
		[recipient],
		LICENSE_INFO_SUBJECT,
		license_info_body(license_name, license_html, &config.from_address),
	)
}

/// Compose and dispatch the license information message.
#[tracing::instrument(name = "send_license_info", skip(sender, config, license_html))]
pub async fn send_license_info<S>(
	sender: &S,
	config: &NotifyConfig,
	license_name: &str,
	license_html: &str,
	recipient: &str,
) -> Result<(), NotifyError>
where
	S: NotificationSender + ?Sized,
{
	let notification = compose_license_info(config, license_name, license_html, recipient)?;
	send_notification(sender, &notification).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use std::sync::Mutex;

	const SILLY_LICENSE_HTML: &str = "This work available under a
<a href=\"http://example.org/goes/nowhere\">very silly license</a>.";

	const EXPECTED_BODY: &str = "Thank you for using a Creative Commons legal tool for your work.

You have selected Creative Commons Very-Silly License 5.8.
You should include a reference to this on the web page that includes
the work in question.

Here is the suggested HTML:

This work available under a
<a href=\"http://example.org/goes/nowhere\">very silly license</a>.

Tips for marking your work can be found at
http://wiki.creativecommons.org/Marking.  Information on the supplied HTML and
metadata can be found at http://wiki.creativecommons.org/CC_REL.

Thank you!
Creative Commons Support
info@creativecommons.org";

	#[derive(Default)]
	struct Inbox(Mutex<Vec<Notification>>);

	#[async_trait]
	impl NotificationSender for Inbox {
		async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
			self.0.lock().unwrap().push(notification.clone());
			Ok(())
		}
	}

	#[test]
	fn test_compose_license_info() {
		let notification = compose_license_info(
			&NotifyConfig::default(),
			"Creative Commons Very-Silly License 5.8",
			SILLY_LICENSE_HTML,
			"ilovesillylicenses@example.org",
		)
		.unwrap();

		assert_eq!(notification.from, "info@creativecommons.org");
		assert_eq!(notification.to_header(), "ilovesillylicenses@example.org");
		assert_eq!(notification.subject, LICENSE_INFO_SUBJECT);
		assert_eq!(notification.body, EXPECTED_BODY);
	}

	#[test]
	fn test_configured_sender_signs_message() {
		let config = NotifyConfig {
			from_address: "licenses@example.org".to_string(),
		};
		let notification =
			compose_license_info(&config, "CC0", "<p>CC0</p>", "someone@example.org").unwrap();

		assert_eq!(notification.from, "licenses@example.org");
		assert!(notification.body.ends_with("Creative Commons Support\nlicenses@example.org"));
	}

	#[test]
	fn test_invalid_recipient() {
		assert!(matches!(
			compose_license_info(&NotifyConfig::default(), "CC0", "", "not-an-address"),
			Err(NotifyError::Address(_))
		));
	}

	#[tokio::test]
	async fn test_send_license_info() {
		let inbox = Inbox::default();
		send_license_info(
			&inbox,
			&NotifyConfig::default(),
			"Creative Commons Very-Silly License 5.8",
			SILLY_LICENSE_HTML,
			"ilovesillylicenses@example.org",
		)
		.await
		.unwrap();

		let delivered = inbox.0.lock().unwrap();
		assert_eq!(delivered.len(), 1);
		assert_eq!(delivered[0].body, EXPECTED_BODY);
	}

	#[tokio::test]
	async fn test_invalid_recipient_is_not_sent() {
		let inbox = Inbox::default();
		let result = send_license_info(&inbox, &NotifyConfig::default(), "CC0", "", "nope").await;

		assert!(result.is_err());
		assert!(inbox.0.lock().unwrap().is_empty());
	}
}
