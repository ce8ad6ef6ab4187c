// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::env;

use serde::{Deserialize, Serialize};

/// Address license information is sent from and signed with.
pub const DEFAULT_FROM_ADDRESS: &str = "info@creativecommons.org";

/// Configuration for outgoing notifications.
///
/// Load it from the environment with [`NotifyConfig::from_env`] or construct
/// it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfig {
	/// Sender address, also used as the signature line.
	#[serde(default = "default_from_address")]
	pub from_address: String,
}

fn default_from_address() -> String {
	DEFAULT_FROM_ADDRESS.to_string()
}

impl Default for NotifyConfig {
	fn default() -> Self {
		Self {
			from_address: default_from_address(),
		}
	}
}

impl NotifyConfig {
	/// Load configuration from environment variables.
	///
	/// # Environment Variables
	///
	/// - `CC_NOTIFY_FROM_ADDRESS` (optional, default: `info@creativecommons.org`):
	///   sender address
	pub fn from_env() -> Self {
		Self::from_values(env::var("CC_NOTIFY_FROM_ADDRESS").ok())
	}

	fn from_values(from_address: Option<String>) -> Self {
		let from_address = from_address
			.map(|v| v.trim().to_string())
			.filter(|v| !v.is_empty())
			.unwrap_or_else(default_from_address);

		Self { from_address }
	}
}
