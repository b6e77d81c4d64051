// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 状态码
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
}

impl EngineError {
    /// 判断错误是否属于"页面不存在"一类的常见失败
    ///
    /// 这类失败在扫描常见路径时是预期内的，只需调试级别日志
    pub fn is_expected_miss(&self) -> bool {
        match self {
            EngineError::HttpStatus(code) => matches!(code, 401 | 403 | 404 | 410),
            EngineError::RequestFailed(e) => e.is_connect(),
            _ => false,
        }
    }
}

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 最终URL（跟随重定向之后）
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取特质
///
/// 实现方对任何网络错误、超时或非 2xx 状态都返回 `Err`，
/// 调用方把 `Err` 当作"没有内容"处理。
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
