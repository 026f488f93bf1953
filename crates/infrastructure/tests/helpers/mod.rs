mod catalog_server_mock;

pub use catalog_server_mock::MockCatalogServer;
