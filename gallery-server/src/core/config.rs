use std::path::PathBuf;

/// 默认主分类 (按优先级排序)
///
/// 用于 `category` 排序和分类角标计数。
pub const DEFAULT_MAIN_CATEGORIES: [&str; 10] = [
    "建筑设计",
    "景观设计",
    "室内设计",
    "规划设计",
    "改造设计",
    "电商设计",
    "创意广告",
    "人物与摄影",
    "插画艺术",
    "创意玩法",
];

const PRESETS_FILE: &str = "presets.json";
const SETTINGS_FILE: &str = "settings.json";
const UPLOADS_DIR: &str = "uploads";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (presets.json, settings.json, uploads/) |
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | MAIN_CATEGORIES | 内置十个分类 | 逗号分隔的主分类列表 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/gallery HTTP_PORT=8080 cargo run -p gallery-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据文件和上传图片
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 主分类 (有序)
    pub main_categories: Vec<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            main_categories: parse_main_categories(std::env::var("MAIN_CATEGORIES").ok().as_deref()),
        }
    }

    /// 使用指定工作目录，其余取默认值
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port: 0,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            main_categories: parse_main_categories(None),
        }
    }

    pub fn presets_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(PRESETS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(SETTINGS_FILE)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(UPLOADS_DIR)
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(self.uploads_dir())?;
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse a comma separated category list, falling back to the built-in one
fn parse_main_categories(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        DEFAULT_MAIN_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_main_categories() {
        let cats = parse_main_categories(None);
        assert_eq!(cats.len(), 10);
        assert_eq!(cats[0], "建筑设计");
        assert_eq!(cats[9], "创意玩法");
    }

    #[test]
    fn test_main_categories_override() {
        let cats = parse_main_categories(Some(" Portrait, ,Landscape ,Product"));
        assert_eq!(cats, vec!["Portrait", "Landscape", "Product"]);
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(parse_main_categories(Some(" , ")).len(), 10);
    }

    #[test]
    fn test_paths_live_under_work_dir() {
        let config = Config::with_work_dir("/srv/gallery");
        assert_eq!(config.presets_path(), PathBuf::from("/srv/gallery/presets.json"));
        assert_eq!(config.settings_path(), PathBuf::from("/srv/gallery/settings.json"));
        assert_eq!(config.uploads_dir(), PathBuf::from("/srv/gallery/uploads"));
        assert!(config.is_development());
        assert!(!config.is_production());
    }
}
