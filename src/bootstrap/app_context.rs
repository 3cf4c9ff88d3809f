use std::sync::Arc;

use crate::application::ports::clock::Clock;
use crate::application::ports::todo_gateway::TodoGateway;
use crate::bootstrap::config::Config;

/// Request-handler state for the proxy. Cheap to clone; nothing in it is
/// mutated after startup.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    todo_gateway: Arc<dyn TodoGateway>,
    clock: Arc<dyn Clock>,
}

impl AppServices {
    pub fn new(todo_gateway: Arc<dyn TodoGateway>, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_gateway,
            clock,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn todo_gateway(&self) -> Arc<dyn TodoGateway> {
        self.services.todo_gateway.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.services.clock.clone()
    }
}
