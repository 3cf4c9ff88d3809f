// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring for the proxy and the new-tab client
// - infrastructure: Notion, proxy client and settings storage adapters
// - presentation: proxy HTTP handlers and routing
// - application: ports, use cases and client-side services
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
