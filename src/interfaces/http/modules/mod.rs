pub mod auth;
pub mod health;
pub mod interchanges;
pub mod metrics;
pub mod tolls;
