//! 编译模块：将常量规则表编译为正则
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledLibraryRule, CompiledPattern, CompiledRuleLibrary, CompiledSignature};
pub use self::compiler::{RuleCompiler, BUILTIN_RULES};
