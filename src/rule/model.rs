//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，全部为进程级只读常量

/// 带权重的匹配模式（正则源码，编译时统一忽略大小写）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPattern {
    pub pattern: &'static str,
    pub weight: u32,
}

/// 单个动画库的分类规则（规则顺序有意义：靠前的规则更具体、权重更高）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub library_name: &'static str,
    pub rules: &'static [WeightedPattern],
}

/// 技术指纹：技术名称 -> 特征正则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechSignature {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// CDN映射条目：库名 -> 独立运行该库所需的外部资源（有序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdnEntry {
    pub library: &'static str,
    pub urls: &'static [&'static str],
}

/// 便于规则表书写的构造函数
pub(crate) const fn wp(pattern: &'static str, weight: u32) -> WeightedPattern {
    WeightedPattern { pattern, weight }
}
