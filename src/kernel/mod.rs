pub mod context;
pub mod dispatcher;
pub mod executor;
pub mod hints;
pub mod intent;
pub mod phrases;
pub mod telemetry;
