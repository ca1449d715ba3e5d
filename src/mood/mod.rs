mod flow;
mod picker;
mod session;
mod share;

pub use flow::{get_mood, resolve_pick};
pub use picker::{pick_mood, pick_mood_with};
pub use session::{Session, ViewState};
pub use share::{BrowserSharer, Sharer, build_share_payload};
