//! Catalog Service - 预设与标签的读写编排
//!
//! 每个操作: 加载文档 → 纯函数计算 → 保存 → 返回。
//! 所有写操作通过同一把 [`Mutex`] 串行化，覆盖预设集合与设置文档两份文件；
//! 读操作不加锁 (文件为原子替换，读者不会看到半截内容)。

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::intent::{PresetQuery, PresetQueryResult, SortMode};
use shared::models::serde_helpers::normalize_tag_name;
use shared::models::{
    GallerySettings, PinnedTags, Preset, PresetCreate, PresetUpdate, TagBatchResult, TagCount,
    TagCreate,
};
use tokio::sync::Mutex;

use super::images::UploadCleanup;
use super::pin_registry::toggle_pin;
use super::query::run_query;
use super::retag::Retag;
use super::tag_index::{list_tags, normalize_tag_names, register_custom_tag};
use crate::core::Config;
use crate::store::{JsonFileStore, PresetStore, SettingsStore};
use crate::utils::time::{now_millis, now_rfc3339};

/// 预设目录服务
pub struct CatalogService {
    presets: Arc<PresetStore>,
    settings: Arc<SettingsStore>,
    main_categories: Vec<String>,
    uploads: UploadCleanup,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("main_categories", &self.main_categories)
            .field("uploads", &self.uploads)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(
        presets: Arc<PresetStore>,
        settings: Arc<SettingsStore>,
        main_categories: Vec<String>,
        uploads: UploadCleanup,
    ) -> Self {
        Self {
            presets,
            settings,
            main_categories,
            uploads,
            write_lock: Mutex::new(()),
        }
    }

    /// JSON file stores under the configured work directory
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(JsonFileStore::<Vec<Preset>>::new(config.presets_path())),
            Arc::new(JsonFileStore::<GallerySettings>::new(config.settings_path())),
            config.main_categories.clone(),
            UploadCleanup::new(config.uploads_dir()),
        )
    }

    pub fn main_categories(&self) -> &[String] {
        &self.main_categories
    }

    // ========== Tags ==========

    /// All tags with usage counts, most used first
    pub async fn list_tags(&self) -> Vec<TagCount> {
        let presets = self.presets.load().await;
        let settings = self.settings.load().await;
        list_tags(&presets, &settings.custom_tags)
    }

    /// Toggle a pin and return the pin list in pin order
    pub async fn toggle_pin(&self, tag: &str) -> AppResult<PinnedTags> {
        let tag = required_tag_name(tag, "tag")?;

        let _guard = self.write_lock.lock().await;
        let mut settings = self.settings.load().await;
        let pinned = toggle_pin(&mut settings.pinned_tags, &tag);
        self.settings.save(&settings).await?;

        tracing::info!(tag = %tag, pinned, "Tag pin toggled");
        Ok(PinnedTags {
            pinned_tags: settings.pinned_tags,
        })
    }

    /// Rename, merge or delete tags across presets and registries
    ///
    /// Presets are written first (only when some preset changed), then the
    /// settings document, which is always written.
    pub async fn batch_retag(
        &self,
        old_names: &[String],
        new_name: Option<&str>,
    ) -> AppResult<TagBatchResult> {
        let retag = Retag::new(old_names, new_name)?;

        let _guard = self.write_lock.lock().await;
        let mut presets = self.presets.load().await;
        let updated_count = retag.apply_to_presets(&mut presets);
        if updated_count > 0 {
            self.presets.save(&presets).await?;
        }

        let mut settings = self.settings.load().await;
        retag.apply_to_settings(&mut settings);
        self.settings.save(&settings).await?;

        tracing::info!(
            old_names = ?retag.old_names(),
            new_name = ?retag.new_name(),
            updated_count,
            "Tags updated"
        );

        Ok(TagBatchResult {
            success: true,
            updated_count,
        })
    }

    /// Register a tag with no usage; re-registering is a no-op
    pub async fn create_custom_tag(&self, name: &str) -> AppResult<TagCreate> {
        let name = required_tag_name(name, "name")?;

        let _guard = self.write_lock.lock().await;
        let mut settings = self.settings.load().await;
        if register_custom_tag(&mut settings, &name) {
            self.settings.save(&settings).await?;
            tracing::info!(tag = %name, "Custom tag created");
        }

        Ok(TagCreate { name })
    }

    /// Current pin and custom registries
    pub async fn settings(&self) -> GallerySettings {
        self.settings.load().await
    }

    // ========== Presets ==========

    /// Filter, sort and optionally paginate the collection
    pub async fn query(&self, query: &PresetQuery) -> PresetQueryResult {
        let presets = self.presets.load().await;
        let pinned = if query.sort == Some(SortMode::PinnedFirst) {
            self.settings.load().await.pinned_tags
        } else {
            Vec::new()
        };
        run_query(&presets, query, &pinned, &self.main_categories)
    }

    /// All presets in arrival order
    pub async fn list_presets(&self) -> Vec<Preset> {
        self.presets.load().await
    }

    pub async fn get_preset(&self, id: &str) -> AppResult<Preset> {
        self.presets
            .load()
            .await
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::preset_not_found(id))
    }

    /// Create a preset at the front of the collection
    pub async fn create_preset(&self, data: PresetCreate) -> AppResult<Preset> {
        let mut preset = Preset {
            id: String::new(),
            title: data.title.trim().to_string(),
            prompt_en: non_empty(data.prompt_en),
            prompt_zh: non_empty(data.prompt_zh),
            categories: normalize_tag_names(&data.categories),
            image: non_empty(data.image),
            created_at: Some(now_rfc3339()),
            extra: Default::default(),
        };
        validate_preset(&preset)?;

        let _guard = self.write_lock.lock().await;
        let mut presets = self.presets.load().await;

        let mut id = now_millis();
        while presets.iter().any(|p| p.id == id.to_string()) {
            id += 1;
        }
        preset.id = id.to_string();

        presets.insert(0, preset.clone());
        self.presets.save(&presets).await?;

        tracing::info!(preset_id = %preset.id, title = %preset.title, "Preset created");
        Ok(preset)
    }

    /// Partial update; absent fields are left as they are
    ///
    /// An empty string clears an optional field (prompts, image). A local
    /// upload the preset no longer points at is removed once unreferenced.
    pub async fn update_preset(&self, id: &str, data: PresetUpdate) -> AppResult<Preset> {
        let _guard = self.write_lock.lock().await;
        let mut presets = self.presets.load().await;

        let preset = presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::preset_not_found(id))?;

        let mut updated = preset.clone();
        if let Some(title) = data.title {
            updated.title = title.trim().to_string();
        }
        if let Some(prompt_en) = data.prompt_en {
            updated.prompt_en = non_empty(Some(prompt_en));
        }
        if let Some(prompt_zh) = data.prompt_zh {
            updated.prompt_zh = non_empty(Some(prompt_zh));
        }
        if let Some(categories) = data.categories {
            updated.categories = normalize_tag_names(&categories);
        }
        if let Some(image) = data.image {
            updated.image = non_empty(Some(image));
        }
        validate_preset(&updated)?;

        let previous = std::mem::replace(preset, updated.clone());
        self.presets.save(&presets).await?;

        if previous.image != updated.image {
            self.release_upload(&presets, &previous).await;
        }

        tracing::info!(preset_id = %id, "Preset updated");
        Ok(updated)
    }

    /// Remove a preset and its local upload
    ///
    /// The upload is kept while another preset still points at it.
    pub async fn delete_preset(&self, id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut presets = self.presets.load().await;

        let pos = presets
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::preset_not_found(id))?;
        let removed = presets.remove(pos);
        self.presets.save(&presets).await?;
        self.release_upload(&presets, &removed).await;

        tracing::info!(preset_id = %id, "Preset deleted");
        Ok(())
    }

    /// Delete `old`'s local upload unless a preset in `presets` still uses it
    async fn release_upload(&self, presets: &[Preset], old: &Preset) {
        if let Some(file_name) = old.local_image_name() {
            let still_used = presets.iter().any(|p| p.image == old.image);
            if !still_used {
                self.uploads.remove(file_name).await;
            }
        }
    }
}

fn required_tag_name(raw: &str, field: &str) -> AppResult<String> {
    normalize_tag_name(raw)
        .map(str::to_string)
        .ok_or_else(|| AppError::new(ErrorCode::TagNameRequired).with_detail("field", field))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_preset(preset: &Preset) -> AppResult<()> {
    if preset.title.is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, "Title is required")
                .with_detail("field", "title"),
        );
    }
    if preset.prompt_en.is_none() && preset.prompt_zh.is_none() {
        return Err(
            AppError::validation("At least one of promptEn or promptZh is required")
                .with_detail("field", "promptEn"),
        );
    }
    Ok(())
}
