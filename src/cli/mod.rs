// CLI module - command execution
pub mod backup;
