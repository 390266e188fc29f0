//!
//! Module with all dtos that are exchanged with the notifications server
//!

mod notification_item;
mod notification_kind;
mod notification_target;

pub use notification_item::NotificationItem;
pub use notification_kind::{
    BookingMetadata, CommentMetadata, NotificationKind, SeatAssignmentMetadata,
};
pub use notification_target::NotificationTarget;
