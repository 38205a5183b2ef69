use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::core::{Config, Result, ServerError};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一次成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<CatalogService> | 预设与标签服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<CatalogService>,
}

impl ServerState {
    pub fn new(config: Config, catalog: Arc<CatalogService>) -> Self {
        Self { config, catalog }
    }

    /// 初始化服务器状态
    ///
    /// 创建工作目录结构，并在工作目录下挂载 JSON 文件存储
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure().map_err(|e| {
            ServerError::Config(format!("无法创建工作目录 {}: {}", config.work_dir, e))
        })?;

        let catalog = Arc::new(CatalogService::from_config(config));
        let presets = catalog.list_presets().await.len();
        tracing::info!(work_dir = %config.work_dir, presets, "Catalog loaded");

        Ok(Self::new(config.clone(), catalog))
    }
}
