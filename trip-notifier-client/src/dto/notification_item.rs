use super::{NotificationKind, NotificationTarget};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    pub recipient_id: String,
    pub actor_id: String,
    pub actor_name: String,
    #[serde(default)]
    pub actor_image: Option<String>,
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub message: String,
    pub is_read: bool,
    /// Only for display. Order of notifications is decided by the server
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl NotificationItem {
    pub fn target(&self) -> NotificationTarget {
        match &self.kind {
            NotificationKind::Reaction { trip_id } | NotificationKind::Save { trip_id } => {
                NotificationTarget::Trip {
                    trip_id: trip_id.clone(),
                }
            }
            NotificationKind::Comment { trip_id, metadata } => NotificationTarget::TripComment {
                trip_id: trip_id.clone(),
                comment_id: metadata.comment_id.clone(),
            },
            NotificationKind::Follow => NotificationTarget::Profile {
                user_id: self.actor_id.clone(),
            },
            NotificationKind::Booking { trip_id, metadata } => NotificationTarget::Booking {
                trip_id: trip_id.clone(),
                booking_id: metadata.booking_id.clone(),
            },
            NotificationKind::SeatAssignment { trip_id, metadata } => NotificationTarget::Seat {
                trip_id: trip_id.clone(),
                seat: metadata.seat.clone(),
            },
        }
    }

    ///
    /// Human readable age of the notification, e.g. `5m ago`.
    /// Notifications older than a week show the date instead.
    ///
    pub fn relative_time(&self, now: OffsetDateTime) -> String {
        let elapsed = now - self.created_at;

        if elapsed.whole_minutes() < 1 {
            "just now".to_string()
        } else if elapsed.whole_hours() < 1 {
            format!("{}m ago", elapsed.whole_minutes())
        } else if elapsed.whole_days() < 1 {
            format!("{}h ago", elapsed.whole_hours())
        } else if elapsed.whole_days() < 7 {
            format!("{}d ago", elapsed.whole_days())
        } else {
            self.created_at.date().to_string()
        }
    }
}

#[cfg(test)]
impl NotificationItem {
    pub fn new_test(id: &str, is_read: bool) -> Self {
        Self {
            id: id.to_string(),
            recipient_id: "user_recipient".to_string(),
            actor_id: "user_actor".to_string(),
            actor_name: "Actor".to_string(),
            actor_image: None,
            kind: NotificationKind::Reaction {
                trip_id: "trip_1".to_string(),
            },
            message: "Actor reacted to your trip".to_string(),
            is_read,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
