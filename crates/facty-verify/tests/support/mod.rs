//! Shared fixtures for pipeline integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use chrono::NaiveDate;
use facty_client::{ChatCompletion, ChatRequest, ChatTransport, ClientError};
use facty_core::enums::VerificationMode;
use facty_verify::{CheckSettings, FactChecker, ProgressUpdate, Unpaced};

/// Chat transport that replays scripted responses in order and records every
/// request it receives. Running past the script is an invalid response.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<ChatCompletion, ClientError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, content: &str) -> Self {
        self.reply_with(ChatCompletion::text(content))
    }

    pub fn reply_with(self, completion: ChatCompletion) -> Self {
        self.script.lock().unwrap().push_back(Ok(completion));
        self
    }

    pub fn fail(self, error: ClientError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatTransport for ScriptedTransport {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatCompletion, ClientError>> + Send {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::InvalidResponse("script exhausted".into())));
        std::future::ready(next)
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn settings(mode: VerificationMode) -> CheckSettings {
    CheckSettings {
        mode,
        ..CheckSettings::default()
    }
}

pub fn checker(
    transport: &ScriptedTransport,
    mode: VerificationMode,
) -> FactChecker<&ScriptedTransport, Unpaced> {
    FactChecker::new(transport, settings(mode)).with_pacer(Unpaced)
}

/// Collects every progress update it sees.
#[derive(Default)]
pub struct Recorder {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl Recorder {
    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn percents(&self) -> Vec<u8> {
        self.updates().iter().map(|u| u.percent).collect()
    }
}

impl facty_verify::ProgressObserver for Recorder {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.updates.lock().unwrap().push(update.clone());
    }
}

pub fn claims_payload(claims: &[&str]) -> String {
    let entries: Vec<_> = claims
        .iter()
        .map(|c| serde_json::json!({"claim": c, "type": "general_fact", "priority": "high"}))
        .collect();
    format!(
        "```json\n{}\n```",
        serde_json::json!({ "claims": entries })
    )
}

pub fn verdict_payload(is_accurate: bool, confidence: &str, issue_type: &str) -> String {
    serde_json::json!({
        "is_accurate": is_accurate,
        "confidence": confidence,
        "issue_type": issue_type,
        "explanation": format!("Checked: {issue_type}"),
        "sources": []
    })
    .to_string()
}
