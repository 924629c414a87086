pub mod app_dirs;
pub mod app_state;
pub mod referral;
pub mod time;

pub use app_dirs::DirsAppDirsAdapter;
pub use app_state::FileAppStateRepository;
pub use referral::InMemoryReferralSourceRepository;
pub use time::{ManualClock, SystemClock};
