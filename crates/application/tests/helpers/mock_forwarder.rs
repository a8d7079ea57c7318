use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::{Record, RecordType};
use simpledns_application::ports::UpstreamForwarder;
use simpledns_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

type Key = (String, RecordType);

/// Upstream stand-in: canned answers per (name, type), and a log of every
/// question it was asked.
#[derive(Default)]
pub struct MockForwarder {
    responses: RwLock<HashMap<Key, Vec<Record>>>,
    errors: RwLock<HashMap<Key, DomainError>>,
    should_fail: AtomicBool,
    calls: Mutex<Vec<Query>>,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, answers: Vec<Record>) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_ascii_lowercase(), record_type), answers);
    }

    pub fn set_error(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert((name.to_ascii_lowercase(), record_type), error);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Query> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn called_names(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|q| q.name().to_ascii().to_ascii_lowercase())
            .collect()
    }
}

#[async_trait]
impl UpstreamForwarder for MockForwarder {
    async fn forward(&self, query: &Query) -> Result<Vec<Record>, DomainError> {
        self.calls.lock().unwrap().push(query.clone());

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("Mock forwarder failed".to_string()));
        }

        let key = (
            query.name().to_ascii().to_ascii_lowercase(),
            query.query_type(),
        );

        if let Some(err) = self.errors.read().unwrap().get(&key).cloned() {
            return Err(err);
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
