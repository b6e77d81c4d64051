// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;

/// 域名错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 规范化后为空
    #[error("Domain is empty after normalization: {0:?}")]
    Empty(String),
}

/// 目标域名
///
/// 已规范化的小写根域名，去除了前导的 `@` 与 `www.`。
/// 构造成功即保证非空。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetDomain(String);

impl TargetDomain {
    /// 从原始输入解析目标域名
    ///
    /// # 参数
    ///
    /// * `raw` - 用户输入，例如 `@WWW.Example.com`
    ///
    /// # 返回值
    ///
    /// * `Ok(TargetDomain)` - 规范化后的域名
    /// * `Err(DomainError)` - 规范化结果为空
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let lowered = raw.trim().trim_start_matches('@').to_lowercase();
        let normalized = lowered
            .strip_prefix("www.")
            .map(str::to_string)
            .unwrap_or(lowered);

        if normalized.is_empty() {
            return Err(DomainError::Empty(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 邮箱地址必须以此后缀结尾才属于该域名
    pub fn email_suffix(&self) -> String {
        format!("@{}", self.0)
    }
}

impl fmt::Display for TargetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
