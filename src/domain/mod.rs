// Provider records and query results
pub mod market;

// Synthetic dollar-cost averaging
pub mod dca;

// Page regions
pub mod slots;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
