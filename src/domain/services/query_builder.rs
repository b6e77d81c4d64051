// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target_domain::TargetDomain;

/// 生成用于发现邮箱地址的搜索查询，按执行顺序排列
pub fn build_queries(domain: &TargetDomain) -> Vec<String> {
    vec![
        format!("\"@{}\"", domain),
        format!("site:{} email", domain),
        format!("\"{}\" email contact", domain),
        format!("intext:\"@{}\"", domain),
    ]
}
