// This is a metapackage for the workspace-level API tests
// Re-export the member crates so the tests see one coherent surface

pub use account_service;
pub use api_gateway;
pub use common;
