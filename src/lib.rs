//! In-memory scoreboard for live matches.
//!
//! - `domain`: entities, validation and the `Scoreboard` trait
//! - `application`: `ScoreboardService`, the single owner shared through handles
//! - `interfaces`: command-line driver
//! - `shared`: metrics

// 将所有模块声明为公共的，这样二进制文件、测试和基准测试都能访问它们
pub mod application;
pub mod domain;
pub mod interfaces;
pub mod shared;
