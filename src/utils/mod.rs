// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for utility functions, located in the
// utils subdirectory.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: logging, user_agent

pub mod logging;
pub mod user_agent;

// Changelog:
// - v2.0.0: Added logging; removed format (folded into MinerStats).
