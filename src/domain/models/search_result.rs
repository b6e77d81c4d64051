// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索结果
///
/// 后端返回的每个字段都可能缺失或为空，读取时一律视为空字符串。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: Option<String>,
    pub body: Option<String>,
    pub href: Option<String>,
    pub engine: String,
}

impl SearchResult {
    pub fn new(
        title: Option<String>,
        body: Option<String>,
        href: Option<String>,
        engine: String,
    ) -> Self {
        Self {
            title,
            body,
            href,
            engine,
        }
    }

    /// 标题与摘要拼接后的文本，供直接挖掘邮箱
    pub fn snippet_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.body.as_deref().unwrap_or("")
        )
    }

    /// 非空的结果链接
    pub fn url(&self) -> Option<&str> {
        self.href.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}
