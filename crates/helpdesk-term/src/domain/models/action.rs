#[derive(Debug, Clone)]
pub enum Action {
    SendMessage { request_id: String, text: String },
    Summarize,
}
