mod health;

pub use health::HealthResponse;
