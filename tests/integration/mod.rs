// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod harvest_batch_test;
pub mod harvest_pipeline_test;
pub mod helpers;
