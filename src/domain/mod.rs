// Domain layer - Warning table, aggregates and observation log
pub mod about;
pub mod aggregate;
pub mod dashboard;
pub mod observation;
pub mod session;
pub mod table;
pub mod warning;
