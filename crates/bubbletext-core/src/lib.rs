mod bold;
mod bullet;
mod emphasis;
mod error;
mod escape;
mod markers;
mod message;
mod normalize;
mod pipeline;
mod reply;

pub use bold::render_bold;
pub use bullet::rewrite_bullets;
pub use emphasis::rewrite_emphasis;
pub use error::{ParseRoleError, ReplyError};
pub use escape::escape_html;
pub use markers::{collapse_markers, strip_stray};
pub use message::{BubbleContent, Message, Role, Transcript};
pub use normalize::normalize;
pub use pipeline::{
    Stage, TEXT_STAGES, format_assistant_text, format_for_display, trace_stages,
};
pub use reply::{REQUEST_FAILED, failure_text, reply_text};
