pub mod activities;
pub mod activity_scans;
pub mod attendees;
pub mod peer_scans;

pub use activities::ActivityRow;
pub use activity_scans::ActivityScanRow;
pub use attendees::AttendeeRow;
pub use peer_scans::PeerScanRow;
