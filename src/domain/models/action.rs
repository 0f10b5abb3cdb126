use super::ChatRequest;

pub enum Action {
    BackendAbort(),
    BackendRequest(ChatRequest),
    GenerateLogo(ChatRequest),
}
