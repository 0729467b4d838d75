// Module exports for CLI subcommands
//
// Each module handles a group of related subcommands. The main.rs dispatches
// to these handlers, keeping the entry point focused on parsing and coordination.

pub mod network;
pub mod paths;
pub mod route;
