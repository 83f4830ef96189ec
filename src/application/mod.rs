// Application layer - Use cases over the warning feed and session state
pub mod warning_feed;
pub mod warnings_service;
