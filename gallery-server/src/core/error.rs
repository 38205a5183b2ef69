use thiserror::Error;

/// Server lifecycle errors (startup, bind, serve)
///
/// Request-level failures use [`shared::error::AppError`]; this type covers
/// what happens around the router.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Server 的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
