use crate::services::{Resolution, ResolutionEngine};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::RecordType;
use tracing::debug;

/// Turns one incoming DNS message into exactly one reply.
pub struct HandleDnsQueryUseCase {
    engine: ResolutionEngine,
    recursion_available: bool,
}

impl HandleDnsQueryUseCase {
    pub fn new(engine: ResolutionEngine) -> Self {
        Self {
            engine,
            recursion_available: true,
        }
    }

    /// Whether replies advertise recursion; false when forwarding is off.
    pub fn with_recursion_available(mut self, recursion_available: bool) -> Self {
        self.recursion_available = recursion_available;
        self
    }

    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }

    pub async fn execute(&self, request: &Message) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(self.recursion_available);
        response.add_queries(request.queries().iter().cloned());

        if request.op_code() != OpCode::Query {
            debug!(op_code = ?request.op_code(), "Unsupported opcode, sending empty reply");
            return response;
        }

        let mut answers = Vec::new();
        for query in request.queries() {
            answers.extend(self.resolve(query).await.answers);
        }

        let types: Vec<RecordType> = request.queries().iter().map(|q| q.query_type()).collect();

        if answers.is_empty() && !request.queries().is_empty() {
            let names: Vec<String> = request
                .queries()
                .iter()
                .map(|q| q.name().to_string())
                .collect();
            debug!(names = ?names, types = ?types, "DNS response not found");
            response.set_response_code(ResponseCode::NXDomain);
        } else {
            let names: Vec<String> = answers.iter().map(|a| a.name().to_string()).collect();
            debug!(names = ?names, types = ?types, "DNS response found");
        }

        response.add_answers(answers);
        response
    }

    async fn resolve(&self, query: &Query) -> Resolution {
        match query.query_type() {
            RecordType::A => self.engine.resolve_a(query).await,
            RecordType::AAAA => self.engine.resolve_aaaa(query).await,
            RecordType::CNAME => self.engine.resolve_cname(query),
            RecordType::PTR => self.engine.resolve_ptr(query).await,
            _ => {
                debug!(record_type = ?query.query_type(), "Unsupported DNS request type");
                self.engine.resolve_other(query).await
            }
        }
    }
}
