//! Domain entities - the core business objects.

mod platform;
mod post;
mod scheduled;

pub use platform::{Platform, PlatformSet, Tone};
pub use post::{GeneratedPost, PostId};
pub use scheduled::{SCHEDULE_DATE_FORMAT, ScheduledPost, parse_schedule_date};
