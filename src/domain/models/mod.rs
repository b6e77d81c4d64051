// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 目标域名（target_domain）：规范化后的待调查域名
/// - 搜索结果（search_result）：搜索后端返回的单条记录
/// - 采集报告（harvest_report）：单个域名的去重邮箱集合与诊断计数
pub mod harvest_report;
pub mod search_result;
pub mod target_domain;
