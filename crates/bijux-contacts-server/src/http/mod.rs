pub(crate) mod body;
pub(crate) mod handlers;
pub(crate) mod request_tracing;
pub(crate) mod response_contract;
