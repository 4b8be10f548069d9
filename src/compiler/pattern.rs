//! 编译后模式模型
//! 正则编译后的结构

use regex::Regex;

/// 编译后的带权模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub regex: Regex,
    pub weight: f64,
}

/// 单个动画库编译后的规则（保持规则表中的顺序）
#[derive(Debug, Clone)]
pub struct CompiledLibraryRule {
    pub library_name: &'static str,
    pub patterns: Vec<CompiledPattern>,
}

/// 编译后的技术指纹
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub name: &'static str,
    pub regex: Regex,
}

/// 编译后的规则库
#[derive(Debug, Clone)]
pub struct CompiledRuleLibrary {
    pub libraries: Vec<CompiledLibraryRule>,
    pub generic_patterns: Vec<Regex>,
    pub signatures: Vec<CompiledSignature>,
    // 已转小写的黑名单子串
    pub blacklist: Vec<String>,
}
