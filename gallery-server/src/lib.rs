//! Gallery Server - 提示词画廊后端
//!
//! # 架构概述
//!
//! - **目录** (`catalog`): 标签/分类一致性引擎与预设查询
//! - **存储** (`store`): JSON 文档存储 (原子替换，损坏时回退为空)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! gallery-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── catalog/       # 标签索引、置顶、批量改名、查询
//! ├── store/         # 文档存储
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志、时间、错误 re-export
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use catalog::CatalogService;
pub use core::{Config, Server, ServerState, build_router};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、读取配置并初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
