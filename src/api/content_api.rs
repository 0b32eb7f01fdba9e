// ==========================================
// 作品集内容管理 - 页面内容 API
// ==========================================
// 后台: 原样读写 JSON
// 公开: 类型化读取，未保存或内容损坏时回落到内置默认内容
// ==========================================

use crate::api::auth_api::AuthApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::content::{
    default_initiatives, AboutPageContent, CareerContent, ContentKey, InitiativesContent,
};
use crate::repository::SiteContentRepository;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ContentApi {
    auth: Arc<AuthApi>,
    content_repo: Arc<SiteContentRepository>,
}

impl ContentApi {
    pub fn new(auth: Arc<AuthApi>, content_repo: Arc<SiteContentRepository>) -> Self {
        Self { auth, content_repo }
    }

    /// 读取已保存的内容（未保存返回 None）
    pub fn get_content(
        &self,
        token: Option<&str>,
        key: ContentKey,
    ) -> ApiResult<Option<serde_json::Value>> {
        self.auth.require_admin(token)?;
        Ok(self.content_repo.get_json(key)?)
    }

    /// 保存内容（整体覆盖）
    pub fn put_content(
        &self,
        token: Option<&str>,
        key: ContentKey,
        value: serde_json::Value,
    ) -> ApiResult<()> {
        self.auth.require_admin(token)?;
        if value.is_null() {
            return Err(ApiError::InvalidInput("Content must not be empty".to_string()));
        }
        self.content_repo.upsert_json(key, &value)?;
        info!(key = %key, "页面内容已保存");
        Ok(())
    }

    pub fn career_content(&self) -> ApiResult<CareerContent> {
        self.typed_or(ContentKey::Career, CareerContent::default)
    }

    pub fn about_page_content(&self) -> ApiResult<AboutPageContent> {
        self.typed_or(ContentKey::AboutPage, AboutPageContent::default)
    }

    pub fn initiatives_content(&self) -> ApiResult<InitiativesContent> {
        self.typed_or(ContentKey::Initiatives, default_initiatives)
    }

    fn typed_or<T, F>(&self, key: ContentKey, fallback: F) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(raw) = self.content_repo.get_raw(key)? else {
            return Ok(fallback());
        };
        match serde_json::from_str::<T>(&raw) {
            Ok(content) => Ok(content),
            Err(e) => {
                warn!(key = %key, error = %e, "页面内容格式错误，使用默认内容");
                Ok(fallback())
            }
        }
    }
}
