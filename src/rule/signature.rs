//! 技术指纹表（粗粒度，命中即纳入，不计算置信度）

use super::model::TechSignature;

pub const TECH_SIGNATURES: &[TechSignature] = &[
    TechSignature { name: "React", pattern: r"react|jsx|createelement" },
    TechSignature { name: "Vue", pattern: r"vue\.js|v-if|v-for|\{\{.*\}\}" },
    TechSignature { name: "Angular", pattern: r"angular|ng-|@component" },
    TechSignature { name: "jQuery", pattern: r"jquery|\$\(" },
    TechSignature { name: "GSAP", pattern: r"gsap|greensock|tweenmax|tweenlite" },
    TechSignature { name: "Framer Motion", pattern: r"framer-motion|motion\." },
    TechSignature { name: "Lottie", pattern: r"lottie|bodymovin" },
    TechSignature { name: "Three.js", pattern: r"three\.js|webgl" },
    TechSignature { name: "Bootstrap", pattern: r"bootstrap" },
    TechSignature { name: "Tailwind", pattern: r"tailwind" },
    TechSignature { name: "AOS", pattern: r"aos\.js|data-aos" },
    TechSignature { name: "Locomotive Scroll", pattern: r"locomotive-scroll" },
    TechSignature { name: "Barba.js", pattern: r"barba\.js" },
    TechSignature { name: "Swiper", pattern: r"swiper" },
    TechSignature { name: "Particles", pattern: r"particles" },
];
