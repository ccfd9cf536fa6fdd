pub mod attendee_service;
pub mod peer_scan_service;
pub mod scan_service;
