//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Challenge Tester,
//! namely type-name rendering and i18n support.
//!
//! 此模块为 Challenge Tester 提供基础设施服务，
//! 即类型名渲染和国际化支持。

pub mod naming;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
