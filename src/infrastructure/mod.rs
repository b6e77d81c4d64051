// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 搜索（search）：搜索后端的具体实现
/// - 存储（storage）：结果文件的本地存储
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知具体技术实现。
pub mod search;
pub mod storage;
