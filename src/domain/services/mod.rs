// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心采集逻辑，这些服务彼此组合完成单个域名的采集。
///
/// 包含的服务：
/// - 邮箱提取（email_extractor）：从任意文本中匹配目标域名的邮箱
/// - 常见路径扫描（common_path_scanner）：直接抓取站点上的联系页面
/// - 查询构建（query_builder）：生成发现邮箱的搜索查询
/// - 搜索客户端（search_client）：把后端失败降级为空结果
/// - 采集服务（harvest_service）：编排以上各步骤并汇总结果
pub mod common_path_scanner;
pub mod email_extractor;
pub mod harvest_service;
pub mod query_builder;
pub mod search_client;
