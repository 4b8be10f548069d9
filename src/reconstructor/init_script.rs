//! 预览文档的动画初始化脚本
//! CDN 资源标签带 `data-cdn-resource` 标记，脚本先等待全部资源的 load/error 信号（有上限），
//! 再按全局符号探测各库并套用默认动画
use std::time::Duration;

const CDN_URLS_SLOT: &str = "__CDN_URLS__";
const HIGH_COUNT_SLOT: &str = "__HIGH_CONFIDENCE_COUNT__";
const GRACE_SLOT: &str = "__GRACE_TIMEOUT_MS__";

const INIT_SCRIPT_TEMPLATE: &str = r#"
// ENHANCED ANIMATION INITIALIZATION
console.log('Initializing animations...');
console.log('CDN URLs loaded:', __CDN_URLS__);
console.log('High-confidence animations:', __HIGH_CONFIDENCE_COUNT__);

function waitForCdnResources(timeoutMs) {
  const pending = Array.from(document.querySelectorAll('[data-cdn-resource]'))
    .filter(el => !el.dataset.cdnState)
    .map(el => new Promise(resolve => {
      el.addEventListener('load', resolve, { once: true });
      el.addEventListener('error', resolve, { once: true });
    }));
  const timeout = new Promise(resolve => setTimeout(resolve, timeoutMs));
  return Promise.race([Promise.all(pending), timeout]);
}

async function initializeAnimations() {
  console.log('Starting enhanced animation initialization...');

  // Wait for every injected CDN resource to signal load or error
  await waitForCdnResources(__GRACE_TIMEOUT_MS__);
  const failedResources = document.querySelectorAll('[data-cdn-state="error"]').length;
  if (failedResources > 0) {
    console.warn('CDN resources failed to load:', failedResources);
  }

  // 1. GSAP
  if (typeof gsap !== 'undefined') {
    console.log('GSAP ready - initializing animations...');

    try {
      gsap.set("*", {clearProps: "all"});

      const elementsToAnimate = document.querySelectorAll('h1, h2, h3, .hero, .title, [class*="fade"], [class*="slide"], [class*="animate"]');

      if (elementsToAnimate.length > 0) {
        gsap.from(elementsToAnimate, {
          opacity: 0,
          y: 50,
          duration: 1,
          stagger: 0.1,
          ease: "power2.out"
        });
      }

      if (typeof ScrollTrigger !== 'undefined') {
        gsap.registerPlugin(ScrollTrigger);

        gsap.utils.toArray('[data-scroll], .scroll-trigger').forEach(element => {
          gsap.from(element, {
            opacity: 0,
            y: 100,
            duration: 1,
            scrollTrigger: {
              trigger: element,
              start: "top 80%",
              end: "bottom 20%",
              toggleActions: "play none none reverse"
            }
          });
        });
      }
    } catch (e) {
      console.warn('GSAP initialization error:', e);
    }
  }

  // 2. Three.js
  if (typeof THREE !== 'undefined') {
    console.log('Three.js ready - initializing scene...');

    const canvas = document.querySelector('canvas') || document.querySelector('#three-canvas');
    if (canvas) {
      try {
        const scene = new THREE.Scene();
        const camera = new THREE.PerspectiveCamera(75, canvas.clientWidth / canvas.clientHeight, 0.1, 1000);
        const renderer = new THREE.WebGLRenderer({ canvas: canvas, alpha: true });

        renderer.setSize(canvas.clientWidth, canvas.clientHeight);

        const geometry = new THREE.BufferGeometry();
        const vertices = [];

        for (let i = 0; i < 1000; i++) {
          vertices.push(
            (Math.random() - 0.5) * 2000,
            (Math.random() - 0.5) * 2000,
            (Math.random() - 0.5) * 2000
          );
        }

        geometry.setAttribute('position', new THREE.Float32BufferAttribute(vertices, 3));

        const material = new THREE.PointsMaterial({ color: 0xffffff, size: 2 });
        const particles = new THREE.Points(geometry, material);
        scene.add(particles);

        camera.position.z = 1000;

        function animate() {
          requestAnimationFrame(animate);
          particles.rotation.x += 0.001;
          particles.rotation.y += 0.001;
          renderer.render(scene, camera);
        }

        animate();
        console.log('Three.js scene initialized');
      } catch (e) {
        console.warn('Three.js initialization failed:', e);
      }
    }
  }

  // 3. AOS
  if (typeof AOS !== 'undefined') {
    console.log('AOS ready - initializing...');
    try {
      AOS.init({
        duration: 1000,
        once: false,
        mirror: true,
        offset: 100
      });
    } catch (e) {
      console.warn('AOS initialization error:', e);
    }
  }

  // 4. Lottie
  if (typeof lottie !== 'undefined') {
    console.log('Lottie ready - initializing...');
    try {
      document.querySelectorAll('[data-lottie], .lottie, [data-animation-path]').forEach(el => {
        const path = el.dataset.lottie || el.dataset.animationPath;
        if (path) {
          lottie.loadAnimation({
            container: el,
            renderer: 'svg',
            loop: true,
            autoplay: true,
            path: path
          });
        }
      });
    } catch (e) {
      console.warn('Lottie initialization error:', e);
    }
  }

  document.body.classList.add('animations-loaded');
  console.log('Enhanced animation initialization complete');
}

// Initialize when DOM is ready
if (document.readyState === 'loading') {
  document.addEventListener('DOMContentLoaded', initializeAnimations);
} else {
  initializeAnimations();
}
"#;

/// CDN 资源标签上的加载状态回写（供初始化脚本判断已完成的资源）
pub const CDN_LOAD_MARKERS: &str =
    r#"data-cdn-resource onload="this.dataset.cdnState='loaded'" onerror="this.dataset.cdnState='error'""#;

/// 生成初始化脚本
pub fn build_init_script(cdn_urls: &[String], high_confidence: usize, grace_timeout: Duration) -> String {
    let urls_json = serde_json::to_string(cdn_urls).unwrap_or_else(|_| "[]".to_string());
    INIT_SCRIPT_TEMPLATE
        .replace(CDN_URLS_SLOT, &urls_json)
        .replace(HIGH_COUNT_SLOT, &high_confidence.to_string())
        .replace(GRACE_SLOT, &grace_timeout.as_millis().to_string())
}
