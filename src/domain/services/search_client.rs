// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::SearchEngine;
use std::sync::Arc;
use tracing::{debug, warn};

/// 搜索客户端
///
/// 包装搜索后端，把任何后端错误降级为空结果并记录警告，
/// 保证搜索失败不会中断采集流程。结果保持后端返回顺序。
pub struct SearchClient {
    engine: Arc<dyn SearchEngine>,
}

impl SearchClient {
    pub fn new(engine: Arc<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    pub async fn search(&self, query: &str, max_results: u32) -> Vec<SearchResult> {
        match self.engine.search(query, max_results).await {
            Ok(results) => {
                debug!(
                    engine = self.engine.name(),
                    count = results.len(),
                    "Search for {} returned",
                    query
                );
                results
            }
            Err(e) => {
                warn!(engine = self.engine.name(), "Search failed for {}: {}", query, e);
                Vec::new()
            }
        }
    }
}
