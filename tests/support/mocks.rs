// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use inklet_core::application::ports::time::Clock;
use inklet_core::domain::article::{ArticleId, ArticleUpdate, ArticleWriteGateway, NewArticle};
use inklet_core::domain::errors::{DomainError, DomainResult};

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock advancing one second per reading, so successive creates get
/// distinct, ordered timestamps.
pub struct TickingClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl TickingClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        self.base + Duration::seconds(*ticks)
    }
}

/// Write gateway standing in for an unreachable backend.
pub struct FailingWriteGateway(pub &'static str);

#[async_trait]
impl ArticleWriteGateway for FailingWriteGateway {
    async fn create(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        Err(DomainError::Transport(self.0.into()))
    }

    async fn update(&self, _id: &ArticleId, _update: ArticleUpdate) -> DomainResult<()> {
        Err(DomainError::Transport(self.0.into()))
    }
}
