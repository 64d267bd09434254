//! Insight feedback and collaboration requests.

use serde::{Deserialize, Serialize};

use super::error::{ServiceError, ServiceResult};

/// Thumbs up or down on an insight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
	/// Useful insight.
	Positive,
	/// Wrong or unhelpful insight.
	Negative,
}

/// A reviewer's reaction to one insight produced by an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightFeedback {
	/// Id of the insight, when it has one.
	#[serde(default)]
	pub insight_id: Option<String>,
	/// Agent that produced the insight.
	pub agent_id: String,
	/// Insight text as shown to the reviewer.
	pub insight: String,
	/// Reviewer's verdict, if any.
	pub rating: Option<Rating>,
	/// Free-form remark.
	#[serde(default)]
	pub comment: String,
}

impl InsightFeedback {
	/// Requires a non-blank agent id and insight.
	pub fn validate(&self) -> ServiceResult<()> {
		if self.agent_id.trim().is_empty() {
			return Err(ServiceError::InvalidFeedback("agent id is empty"));
		}
		if self.insight.trim().is_empty() {
			return Err(ServiceError::InvalidFeedback("insight is empty"));
		}
		Ok(())
	}
}

/// Receipt for accepted feedback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAck {
	/// Echoed from the feedback.
	pub agent_id: String,
	/// Echoed from the feedback.
	pub insight_id: Option<String>,
	/// Echoed from the feedback.
	pub rating: Option<Rating>,
}

/// Highest collaboration level a project can request.
pub const MAX_COLLABORATION_LEVEL: u8 = 100;

/// Asks several agents to work on one project together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationRequest {
	/// Project the agents collaborate on.
	pub project_id: String,
	/// Participating agents; at least one.
	pub agent_ids: Vec<String>,
	/// How closely they cooperate, `0..=MAX_COLLABORATION_LEVEL`.
	pub level: u8,
}

impl CollaborationRequest {
	/// Requires a project, at least one agent and a level within bounds.
	pub fn validate(&self) -> ServiceResult<()> {
		if self.project_id.trim().is_empty() {
			return Err(ServiceError::InvalidCollaboration("project id is empty"));
		}
		if self.agent_ids.is_empty() {
			return Err(ServiceError::InvalidCollaboration("no agents"));
		}
		if self.level > MAX_COLLABORATION_LEVEL {
			return Err(ServiceError::InvalidCollaboration("level above 100"));
		}
		Ok(())
	}
}

/// Receipt for a started collaboration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationAck {
	/// Echoed from the request.
	pub project_id: String,
	/// Number of participating agents.
	pub agent_count: usize,
	/// Echoed from the request.
	pub level: u8,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn feedback(agent_id: &str, insight: &str) -> InsightFeedback {
		InsightFeedback {
			insight_id: None,
			agent_id: agent_id.to_string(),
			insight: insight.to_string(),
			rating: Some(Rating::Positive),
			comment: String::new(),
		}
	}

	#[test]
	fn feedback_requires_agent_and_insight() {
		assert!(feedback("a1", "Participants distrust the onboarding").validate().is_ok());
		assert_eq!(
			feedback(" ", "x").validate(),
			Err(ServiceError::InvalidFeedback("agent id is empty"))
		);
		assert_eq!(
			feedback("a1", "").validate(),
			Err(ServiceError::InvalidFeedback("insight is empty"))
		);
	}

	#[test]
	fn feedback_parses_null_rating() {
		let fb: InsightFeedback =
			serde_json::from_str(r#"{ "agentId": "a", "insight": "i", "rating": null }"#).unwrap();
		assert_eq!(fb.rating, None);
		assert_eq!(fb.comment, "");
	}

	#[test]
	fn collaboration_bounds() {
		let mut req = CollaborationRequest {
			project_id: "p1".to_string(),
			agent_ids: vec!["a1".to_string()],
			level: 100,
		};
		assert!(req.validate().is_ok());

		req.level = 101;
		assert!(req.validate().is_err());

		req.level = 50;
		req.agent_ids.clear();
		assert_eq!(
			req.validate(),
			Err(ServiceError::InvalidCollaboration("no agents"))
		);
	}
}
