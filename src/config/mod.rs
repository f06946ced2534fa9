// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod settings;

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
