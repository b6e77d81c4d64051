// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：目标域名、搜索结果、采集报告
/// - 仓库接口（repositories）：结果持久化抽象接口
/// - 搜索（search）：搜索后端抽象接口
/// - 服务（services）：邮箱提取与采集编排
///
/// 领域层不依赖于任何具体的网络或存储实现。
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
