pub mod clock;
pub mod matcher;

pub use clock::{Clock, ManualClock, SystemClock};
pub use matcher::IGlyphMatcher;
