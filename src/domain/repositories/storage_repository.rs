// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 存储仓库特质
///
/// 定义采集结果的持久化接口
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定键保存数据，返回数据最终所在的位置
    async fn save(&self, key: &str, data: &[u8]) -> Result<String, StorageError>;
}
