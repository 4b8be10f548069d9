//! 会话登记：单调递增的会话编号 + 最新结果槽位
//! 仅当没有更新的会话开始时，完成的会话才会发布到槽位
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::model::AnalysisSession;

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sequence: AtomicU64,
    latest: RwLock<Option<Arc<AnalysisSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始新会话，返回其编号（从 1 开始）
    pub fn begin(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 是否仍为最新开始的会话
    pub fn is_current(&self, id: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == id
    }

    /// 发布会话；已被更新会话取代时丢弃并返回 false
    pub async fn publish(&self, session: &AnalysisSession) -> bool {
        let mut slot = self.latest.write().await;
        if !self.is_current(session.id) {
            info!(
                "会话{}（{}）已被更新的会话取代，结果不发布",
                session.id, session.target_url
            );
            return false;
        }
        *slot = Some(Arc::new(session.clone()));
        debug!("会话{}结果已发布", session.id);
        true
    }

    pub async fn latest(&self) -> Option<Arc<AnalysisSession>> {
        self.latest.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisResult;

    fn session(id: u64) -> AnalysisSession {
        AnalysisSession {
            id,
            target_url: format!("https://site{}.test/", id),
            result: AnalysisResult::default(),
        }
    }

    #[tokio::test]
    async fn test_stale_session_discarded() {
        let registry = SessionRegistry::new();
        let first = registry.begin();
        let second = registry.begin();
        assert_eq!((first, second), (1, 2));

        assert!(registry.publish(&session(second)).await);
        assert!(!registry.publish(&session(first)).await);
        assert_eq!(registry.latest().await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_empty_until_published() {
        let registry = SessionRegistry::new();
        let id = registry.begin();
        assert!(registry.latest().await.is_none());
        assert!(registry.is_current(id));
        assert!(registry.publish(&session(id)).await);
        assert_eq!(registry.latest().await.unwrap().target_url, "https://site1.test/");
    }
}
