pub mod attendees;
pub mod peer_scans;
pub mod scans;
