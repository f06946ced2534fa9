// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod extraction_service;

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod extraction_service_test;
