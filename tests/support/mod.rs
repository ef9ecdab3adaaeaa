// tests/support/mod.rs
pub mod mocks;

use std::sync::Arc;

use inklet_core::application::ports::ClockPort;
use inklet_core::application::services::ApplicationServices;
use inklet_core::infrastructure::repositories::InMemoryArticleGateway;
use inklet_core::infrastructure::util::DefaultSlugGenerator;

pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Services wired to one shared in-memory gateway.
pub fn in_memory_services(clock: Arc<ClockPort>) -> (Arc<ApplicationServices>, Arc<InMemoryArticleGateway>) {
    let gateway = Arc::new(InMemoryArticleGateway::new(clock));
    let services = Arc::new(ApplicationServices::new(
        gateway.clone(),
        gateway.clone(),
        Arc::new(DefaultSlugGenerator),
    ));
    (services, gateway)
}
