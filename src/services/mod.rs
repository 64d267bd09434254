//! Placeholder research services.
//!
//! The dashboard talks to its backend through [`ResearchBackend`]. Until the
//! real backend exists, [`MockBackend`] answers from the fixed catalogue and
//! keeps edited agents in memory.

pub mod agents;
pub mod catalog;
pub mod error;
pub mod feedback;

use std::collections::HashMap;

use log::info;

pub use agents::{AgentDraft, AgentProfile, AgentStatus};
pub use catalog::{Methodology, Persona};
pub use error::{ServiceError, ServiceResult};
pub use feedback::{CollaborationAck, CollaborationRequest, FeedbackAck, InsightFeedback, Rating};

/// Request/response contract between the dashboard and its backend.
pub trait ResearchBackend {
	/// All analysis personas.
	fn personas(&self) -> Vec<Persona>;

	/// All analysis methodologies.
	fn methodologies(&self) -> Vec<Methodology>;

	/// Creates an agent from `draft`, assigning an id when it has none.
	fn create_custom_agent(&mut self, draft: AgentDraft) -> AgentProfile;

	/// Replaces the agent's custom prompt.
	fn update_agent_prompt(&mut self, agent_id: &str, prompt: &str) -> AgentProfile;

	/// Gives the agent a catalogue persona and its name.
	fn assign_persona(&mut self, agent_id: &str, persona_id: &str) -> ServiceResult<AgentProfile>;

	/// Pins a catalogue methodology and makes it the active one.
	fn pin_methodology(&mut self, agent_id: &str, methodology_id: &str)
	-> ServiceResult<AgentProfile>;

	/// Unpins a methodology. Unknown ids are a no-op.
	fn unpin_methodology(&mut self, agent_id: &str, methodology_id: &str) -> AgentProfile;

	/// Records feedback on an insight.
	fn submit_feedback(&mut self, feedback: InsightFeedback) -> ServiceResult<FeedbackAck>;

	/// Starts a multi-agent collaboration on a project.
	fn start_collaboration(
		&mut self,
		request: CollaborationRequest,
	) -> ServiceResult<CollaborationAck>;
}

/// In-memory stand-in for the research backend.
#[derive(Debug, Default)]
pub struct MockBackend {
	agents: HashMap<String, AgentProfile>,
	feedback: Vec<InsightFeedback>,
	next_id: u64,
}

impl MockBackend {
	/// Empty backend.
	pub fn new() -> Self {
		Self::default()
	}

	/// Agent stored under `id`, if it was created or edited.
	pub fn agent(&self, id: &str) -> Option<&AgentProfile> {
		self.agents.get(id)
	}

	/// Feedback accepted so far, oldest first.
	pub fn feedback(&self) -> &[InsightFeedback] {
		&self.feedback
	}

	fn next_agent_id(&mut self) -> String {
		self.next_id += 1;
		format!("custom-{}", self.next_id)
	}

	/// Stored agent, or a fresh base profile carrying `agent_id`.
	fn agent_mut(&mut self, agent_id: &str) -> &mut AgentProfile {
		self.agents
			.entry(agent_id.to_string())
			.or_insert_with(|| AgentProfile::base(agent_id))
	}
}

impl ResearchBackend for MockBackend {
	fn personas(&self) -> Vec<Persona> {
		catalog::personas()
	}

	fn methodologies(&self) -> Vec<Methodology> {
		catalog::methodologies()
	}

	fn create_custom_agent(&mut self, mut draft: AgentDraft) -> AgentProfile {
		let id = draft.id.take().unwrap_or_else(|| self.next_agent_id());
		let agent = draft.apply(AgentProfile::base(id));
		info!("services: created agent {}", agent.id);
		self.agents.insert(agent.id.clone(), agent.clone());
		agent
	}

	fn update_agent_prompt(&mut self, agent_id: &str, prompt: &str) -> AgentProfile {
		info!("services: updating prompt for agent {}", agent_id);
		let agent = self.agent_mut(agent_id);
		agent.prompt = Some(prompt.to_string());
		agent.clone()
	}

	fn assign_persona(&mut self, agent_id: &str, persona_id: &str) -> ServiceResult<AgentProfile> {
		let persona = catalog::find_persona(persona_id)
			.ok_or_else(|| ServiceError::UnknownPersona(persona_id.to_string()))?;
		info!("services: assigning persona {} to agent {}", persona_id, agent_id);
		let agent = self.agent_mut(agent_id);
		agent.assign_persona(persona);
		Ok(agent.clone())
	}

	fn pin_methodology(
		&mut self,
		agent_id: &str,
		methodology_id: &str,
	) -> ServiceResult<AgentProfile> {
		if !catalog::has_methodology(methodology_id) {
			return Err(ServiceError::UnknownMethodology(methodology_id.to_string()));
		}
		info!("services: pinning {} to agent {}", methodology_id, agent_id);
		let agent = self.agent_mut(agent_id);
		agent.pin(methodology_id);
		Ok(agent.clone())
	}

	fn unpin_methodology(&mut self, agent_id: &str, methodology_id: &str) -> AgentProfile {
		info!("services: unpinning {} from agent {}", methodology_id, agent_id);
		let agent = self.agent_mut(agent_id);
		agent.unpin(methodology_id);
		agent.clone()
	}

	fn submit_feedback(&mut self, feedback: InsightFeedback) -> ServiceResult<FeedbackAck> {
		feedback.validate()?;
		info!("services: feedback on agent {} insight", feedback.agent_id);
		let ack = FeedbackAck {
			agent_id: feedback.agent_id.clone(),
			insight_id: feedback.insight_id.clone(),
			rating: feedback.rating,
		};
		self.feedback.push(feedback);
		Ok(ack)
	}

	fn start_collaboration(
		&mut self,
		request: CollaborationRequest,
	) -> ServiceResult<CollaborationAck> {
		request.validate()?;
		info!(
			"services: collaboration for project {} with agents {} at level {}",
			request.project_id,
			request.agent_ids.join(", "),
			request.level
		);
		Ok(CollaborationAck {
			agent_count: request.agent_ids.len(),
			project_id: request.project_id,
			level: request.level,
		})
	}
}
