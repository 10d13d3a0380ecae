// Agent factory
pub mod agent;

// Stage artifact persistence
pub mod artifacts;

// Runtime configuration
pub mod config;

// Sequential crew execution
pub mod crew;

// Role catalog
pub mod roles;

// Task template library
pub mod tasks;

// Workflow orchestration
pub mod workflow;
