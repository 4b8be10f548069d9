//! 规则编译器核心
//! 仅负责将常量规则表编译为可执行的正则模式

use std::time::Instant;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::pattern::{CompiledLibraryRule, CompiledPattern, CompiledRuleLibrary, CompiledSignature};
use crate::error::InspectResult;
use crate::rule::{ClassificationRule, TechSignature, BLACKLIST, GENERIC_PATTERNS, LIBRARY_RULES, TECH_SIGNATURES};

/// 内置规则表编译结果（进程内仅编译一次，只读共享）
pub static BUILTIN_RULES: Lazy<CompiledRuleLibrary> = Lazy::new(|| {
    RuleCompiler::compile_builtin().unwrap_or_else(|e| {
        panic!("内置规则表编译失败，请检查 rule 模块中的正则：{}", e);
    })
});

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译内置规则表
    pub fn compile_builtin() -> InspectResult<CompiledRuleLibrary> {
        Self::compile(LIBRARY_RULES, GENERIC_PATTERNS, TECH_SIGNATURES, BLACKLIST)
    }

    /// 编译任意规则表（所有模式均忽略大小写）
    pub fn compile(
        libraries: &[ClassificationRule],
        generic_patterns: &[&str],
        signatures: &[TechSignature],
        blacklist: &[&str],
    ) -> InspectResult<CompiledRuleLibrary> {
        let start = Instant::now();

        let libraries = libraries
            .iter()
            .map(Self::compile_library)
            .collect::<InspectResult<Vec<_>>>()?;

        let generic_patterns = generic_patterns
            .iter()
            .map(|p| Self::compile_regex(p))
            .collect::<InspectResult<Vec<_>>>()?;

        let signatures = signatures
            .iter()
            .map(|sig| {
                Ok(CompiledSignature {
                    name: sig.name,
                    regex: Self::compile_regex(sig.pattern)?,
                })
            })
            .collect::<InspectResult<Vec<_>>>()?;

        let blacklist = blacklist.iter().map(|item| item.to_lowercase()).collect();

        debug!(
            "✅ 规则表编译完成，耗时{:?}：库规则{}条、通用写法{}条、技术指纹{}条",
            start.elapsed(),
            libraries.len(),
            generic_patterns.len(),
            signatures.len()
        );

        Ok(CompiledRuleLibrary {
            libraries,
            generic_patterns,
            signatures,
            blacklist,
        })
    }

    /// 编译单个库的规则
    fn compile_library(rule: &ClassificationRule) -> InspectResult<CompiledLibraryRule> {
        let patterns = rule
            .rules
            .iter()
            .map(|wp| {
                Ok(CompiledPattern {
                    regex: Self::compile_regex(wp.pattern)?,
                    weight: f64::from(wp.weight),
                })
            })
            .collect::<InspectResult<Vec<_>>>()?;

        Ok(CompiledLibraryRule {
            library_name: rule.library_name,
            patterns,
        })
    }

    fn compile_regex(pattern: &str) -> InspectResult<Regex> {
        Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
    }
}
