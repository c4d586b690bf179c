mod presence;
mod user;

pub use presence::{
    MeanTimeEntry, MeanTimeRow, StartEndEntry, StartEndRow, WeekdayPresenceEntry,
    WeekdayPresenceItem, WeekdayPresenceRow,
};
pub use user::{OptionEntry, RawUserRecord, UserRecord};
