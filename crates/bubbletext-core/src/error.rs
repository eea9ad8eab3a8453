use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown role `{0}` (expected `user` or `assistant`)")]
pub struct ParseRoleError(pub String);

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("chat reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
