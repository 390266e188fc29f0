use serde::{Deserialize, Serialize};

///
/// Event that triggered the notification.
/// Every kind carries exactly the routing hints it needs.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NotificationKind {
    Reaction {
        #[serde(rename = "tripId")]
        trip_id: String,
    },
    Save {
        #[serde(rename = "tripId")]
        trip_id: String,
    },
    Comment {
        #[serde(rename = "tripId")]
        trip_id: String,
        metadata: CommentMetadata,
    },
    Follow,
    Booking {
        #[serde(rename = "tripId")]
        trip_id: String,
        metadata: BookingMetadata,
    },
    SeatAssignment {
        #[serde(rename = "tripId")]
        trip_id: String,
        metadata: SeatAssignmentMetadata,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentMetadata {
    pub comment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingMetadata {
    pub booking_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignmentMetadata {
    pub seat: String,
}
