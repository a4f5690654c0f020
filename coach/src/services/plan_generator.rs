//! Structured practice-plan generation
//!
//! Asks one designated provider for a schema-constrained weekly plan and
//! merges in the curated resource catalog. Unlike session analysis,
//! failures here propagate to the caller: the path is optional and
//! user-initiated.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::core::prompt::build_plan_prompt;
use crate::error::{CoachError, CoachResult};
use crate::services::catalog;
use crate::traits::PlanGenerator;
use crate::types::{PlanDay, PracticePlan, PracticePlanRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const PLAN_MODEL: &str = "gpt-4o-mini";

/// Wire shape of the schema-constrained plan payload
#[derive(Debug, Deserialize)]
struct PlanDocument {
    #[serde(rename = "practicePlan")]
    practice_plan: Vec<PlanDay>,
}

/// OpenAI-backed plan generator using a strict JSON schema response
pub struct OpenAiPlanGenerator {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl OpenAiPlanGenerator {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, OPENAI_ENDPOINT)
    }

    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    fn plan_schema() -> serde_json::Value {
        serde_json::json!({
            "name": "practice_plan",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "practicePlan": {
                        "type": "array",
                        "description": "1-week practice plan with daily sessions including exercises",
                        "items": {
                            "type": "object",
                            "properties": {
                                "day": { "type": "string", "description": "Day label (e.g., Day 1, Day 2)" },
                                "focus": { "type": "string", "description": "Daily focus area" },
                                "exercises": { "type": "string", "description": "Specific exercises to practice this day" },
                                "activities": { "type": "string", "description": "Additional activities and goals for the day" }
                            },
                            "required": ["day", "focus", "exercises", "activities"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["practicePlan"],
                "additionalProperties": false
            }
        })
    }
}

#[async_trait]
impl PlanGenerator for OpenAiPlanGenerator {
    async fn generate_plan(&self, request: &PracticePlanRequest) -> CoachResult<PracticePlan> {
        let api_key = self.api_key.as_deref().ok_or_else(|| CoachError::PlanGeneration {
            message: "OpenAI API key not configured".to_string(),
        })?;

        info!(mode = %request.mode, "requesting weekly practice plan");

        let request_body = serde_json::json!({
            "model": PLAN_MODEL,
            "messages": [
                {
                    "role": "system",
                    "content": build_plan_prompt(request)
                },
                {
                    "role": "user",
                    "content": "Generate my personalized public speaking practice plan."
                }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": Self::plan_schema()
            },
            "temperature": 0.3,
            "max_tokens": 1500
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CoachError::PlanGeneration {
                message: format!("request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(CoachError::PlanGeneration {
                message: format!("provider returned {}", response.status()),
            });
        }

        let response_json: serde_json::Value =
            response.json().await.map_err(|e| CoachError::PlanGeneration {
                message: format!("failed to parse response: {e}"),
            })?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| CoachError::PlanGeneration {
                message: "no content in response".to_string(),
            })?;

        let document: PlanDocument =
            serde_json::from_str(content).map_err(|e| CoachError::PlanGeneration {
                message: format!("plan did not match the expected schema: {e}"),
            })?;

        Ok(PracticePlan {
            days: document.practice_plan,
            resources: catalog::resources_for(request.mode),
        })
    }
}
