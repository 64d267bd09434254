//! Project status badge.
//!
//! Maps a project status to a colour, icon and label. The mapping is a plain
//! lookup table so it can be checked without rendering anything.

use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a research project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
	/// Being set up, not yet analysed.
	Draft,
	/// Analysis under way.
	InProgress,
	/// Agents are crunching data.
	Processing,
	/// Analysis finished.
	Completed,
	/// Analysis failed.
	Failed,
}

impl FromStr for ProjectStatus {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"draft" => Ok(Self::Draft),
			"in-progress" => Ok(Self::InProgress),
			"processing" => Ok(Self::Processing),
			"completed" => Ok(Self::Completed),
			"failed" => Ok(Self::Failed),
			_ => Err(()),
		}
	}
}

/// Badge text, padding and icon scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
	/// Compact, for dense lists.
	Sm,
	/// Regular.
	#[default]
	Md,
	/// Large.
	Lg,
}

impl BadgeSize {
	fn icon_class(self) -> &'static str {
		match self {
			BadgeSize::Sm => "h-3 w-3",
			BadgeSize::Md => "h-4 w-4",
			BadgeSize::Lg => "h-5 w-5",
		}
	}

	fn padding_class(self) -> &'static str {
		match self {
			BadgeSize::Sm => "text-xs px-2 py-0.5",
			BadgeSize::Md => "text-xs px-2.5 py-1",
			BadgeSize::Lg => "text-sm px-3 py-1.5",
		}
	}
}

/// Icon shown in front of the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BadgeIcon {
	FileEdit,
	Clock,
	Loader,
	CheckCircle,
	AlertCircle,
}

impl BadgeIcon {
	/// Icon-set name, used as `icon-<name>` class.
	pub fn name(self) -> &'static str {
		match self {
			BadgeIcon::FileEdit => "file-edit",
			BadgeIcon::Clock => "clock",
			BadgeIcon::Loader => "loader",
			BadgeIcon::CheckCircle => "check-circle",
			BadgeIcon::AlertCircle => "alert-circle",
		}
	}

	/// Only the loader spins.
	pub fn spins(self) -> bool {
		matches!(self, BadgeIcon::Loader)
	}
}

/// Resolved look of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeAppearance {
	/// Background, text and hover classes.
	pub color: &'static str,
	/// Leading icon.
	pub icon: BadgeIcon,
	/// Visible text.
	pub label: &'static str,
}

const PROCESSING: BadgeAppearance = BadgeAppearance {
	color: "bg-purple-500 hover:bg-purple-600",
	icon: BadgeIcon::Loader,
	label: "Processing",
};

/// Looks up the badge for `status`. `processing` overrides any status;
/// `None` is an unrecognised status.
pub fn appearance(status: Option<ProjectStatus>, processing: bool) -> BadgeAppearance {
	if processing {
		return PROCESSING;
	}

	match status {
		Some(ProjectStatus::Draft) => BadgeAppearance {
			color: "bg-orange-200 text-orange-800 hover:bg-orange-300",
			icon: BadgeIcon::FileEdit,
			label: "Draft",
		},
		Some(ProjectStatus::InProgress) => BadgeAppearance {
			color: "bg-yellow-200 text-yellow-800 hover:bg-yellow-300",
			icon: BadgeIcon::Clock,
			label: "In Progress",
		},
		Some(ProjectStatus::Processing) => PROCESSING,
		Some(ProjectStatus::Completed) => BadgeAppearance {
			color: "bg-green-500 hover:bg-green-600",
			icon: BadgeIcon::CheckCircle,
			label: "Completed",
		},
		Some(ProjectStatus::Failed) => BadgeAppearance {
			color: "bg-red-500 hover:bg-red-600",
			icon: BadgeIcon::AlertCircle,
			label: "Failed",
		},
		None => BadgeAppearance {
			color: "bg-gray-200 text-gray-800 hover:bg-gray-300",
			icon: BadgeIcon::Clock,
			label: "Unknown",
		},
	}
}

fn badge_class(look: &BadgeAppearance, size: BadgeSize, show_label: bool, extra: &str) -> String {
	let mut class = format!("badge font-medium {} {}", look.color, size.padding_class());
	if show_label {
		class.push_str(" min-w-20");
	}
	if !extra.is_empty() {
		class.push(' ');
		class.push_str(extra);
	}
	class
}

fn icon_class(look: &BadgeAppearance, size: BadgeSize) -> String {
	let mut class = format!("icon icon-{} {}", look.icon.name(), size.icon_class());
	if look.icon.spins() {
		class.push_str(" animate-spin");
	}
	class
}

/// Small pill showing a project's status.
#[component]
pub fn StatusBadge(
	/// Project status; `None` shows "Unknown".
	#[prop(into)]
	status: Option<ProjectStatus>,
	/// Shows the processing badge regardless of `status`.
	#[prop(default = false)]
	processing: bool,
	/// Text and icon scale.
	#[prop(default = BadgeSize::Md)]
	size: BadgeSize,
	/// Whether to render the icon.
	#[prop(default = true)]
	show_icon: bool,
	/// Whether to render the label.
	#[prop(default = true)]
	show_label: bool,
	/// Extra classes appended to the badge.
	#[prop(optional, into)]
	class: String,
) -> impl IntoView {
	let look = appearance(status, processing);
	let class = badge_class(&look, size, show_label, &class);
	let icon = icon_class(&look, size);

	view! {
		<span class=class data-status=look.label>
			{show_icon.then(|| view! { <span class="mr-1"><i class=icon aria-hidden="true"></i></span> })}
			{show_label.then_some(look.label)}
		</span>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_statuses() {
		assert_eq!("draft".parse(), Ok(ProjectStatus::Draft));
		assert_eq!("in-progress".parse(), Ok(ProjectStatus::InProgress));
		assert_eq!("failed".parse(), Ok(ProjectStatus::Failed));
		assert!("archived".parse::<ProjectStatus>().is_err());
		assert!("In-Progress".parse::<ProjectStatus>().is_err());
	}

	#[test]
	fn serde_uses_kebab_case() {
		let status: ProjectStatus = serde_json::from_str(r#""in-progress""#).unwrap();
		assert_eq!(status, ProjectStatus::InProgress);
		assert_eq!(
			serde_json::to_string(&ProjectStatus::Completed).unwrap(),
			r#""completed""#
		);
	}

	#[test]
	fn lookup_table() {
		let cases = [
			(Some(ProjectStatus::Draft), BadgeIcon::FileEdit, "Draft"),
			(Some(ProjectStatus::InProgress), BadgeIcon::Clock, "In Progress"),
			(Some(ProjectStatus::Processing), BadgeIcon::Loader, "Processing"),
			(Some(ProjectStatus::Completed), BadgeIcon::CheckCircle, "Completed"),
			(Some(ProjectStatus::Failed), BadgeIcon::AlertCircle, "Failed"),
			(None, BadgeIcon::Clock, "Unknown"),
		];
		for (status, icon, label) in cases {
			let look = appearance(status, false);
			assert_eq!(look.icon, icon);
			assert_eq!(look.label, label);
		}
	}

	#[test]
	fn processing_flag_overrides_status() {
		for status in [Some(ProjectStatus::Failed), Some(ProjectStatus::Draft), None] {
			assert_eq!(appearance(status, true), PROCESSING);
		}
	}

	#[test]
	fn classes_follow_size_and_flags() {
		let look = appearance(Some(ProjectStatus::Processing), false);
		assert_eq!(icon_class(&look, BadgeSize::Sm), "icon icon-loader h-3 w-3 animate-spin");

		let class = badge_class(&look, BadgeSize::Lg, true, "ml-2");
		assert!(class.contains("text-sm px-3 py-1.5"));
		assert!(class.contains("min-w-20"));
		assert!(class.ends_with("ml-2"));

		let class = badge_class(&look, BadgeSize::Md, false, "");
		assert!(!class.contains("min-w-20"));
		assert!(class.ends_with("text-xs px-2.5 py-1"));
	}
}
