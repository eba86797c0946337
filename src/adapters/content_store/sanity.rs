//! Sanity content-store adapter.
//!
//! Serializes a finished screening result to the `testResult` document
//! shape and creates it through the dataset mutate endpoint. The only
//! operation used is "create"; reads stay with the surrounding site.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::config::ContentStoreConfig;
use crate::domain::result::ScreeningResult;
use crate::ports::{DocumentId, ResultStore, StoreError};

pub struct SanityResultStore {
    client: reqwest::Client,
    mutate_url: String,
    token: secrecy::SecretString,
}

impl SanityResultStore {
    pub fn new(config: &ContentStoreConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            mutate_url: config.mutate_url(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl ResultStore for SanityResultStore {
    async fn save(&self, result: &ScreeningResult) -> Result<DocumentId, StoreError> {
        let body = json!({
            "mutations": [{ "create": result_document(result) }],
            "returnIds": true,
        });

        let response = self
            .client
            .post(&self.mutate_url)
            .bearer_auth(self.token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::PermissionDenied);
        }
        if status == reqwest::StatusCode::BAD_REQUEST {
            let detail = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(detail));
        }
        if !status.is_success() {
            return Err(StoreError::Transport(format!(
                "mutate endpoint returned {}",
                status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let id = payload["results"][0]["id"]
            .as_str()
            .ok_or_else(|| StoreError::Transport("mutate response carried no document id".into()))?;

        Ok(DocumentId::new(id))
    }
}

/// The `testResult` document written to the content store.
fn result_document(result: &ScreeningResult) -> Value {
    let answers: Vec<Value> = result
        .answers
        .iter()
        .map(|a| {
            json!({
                "questionId": a.prompt_id,
                "questionText": a.prompt_text,
                "selectedOption": a.option_text,
                "selectedValue": a.value,
                "weight": a.weight,
            })
        })
        .collect();

    json!({
        "_type": "testResult",
        "test": result.instrument_id,
        "answers": answers,
        "totalScore": result.total_score,
        "interpretation": result.interpretation,
        "severity": result.severity.as_str(),
        "userInfo": {
            "firstName": result.contact.first_name(),
            "lastName": result.contact.last_name(),
            "email": result.contact.email(),
            "phone": result.contact.phone(),
        },
        "createdAt": result.submitted_at.to_iso8601(),
        "status": "completed",
        "needsFollowUp": result.needs_follow_up,
    })
}
