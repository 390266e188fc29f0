///
/// Where user should be taken after clicking the notification
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationTarget {
    Trip { trip_id: String },
    TripComment { trip_id: String, comment_id: String },
    Booking { trip_id: String, booking_id: String },
    Seat { trip_id: String, seat: String },
    Profile { user_id: String },
}

impl NotificationTarget {
    pub fn path(&self) -> String {
        match self {
            NotificationTarget::Trip { trip_id } => format!("/trips/{trip_id}"),
            NotificationTarget::TripComment {
                trip_id,
                comment_id,
            } => format!("/trips/{trip_id}#comment-{comment_id}"),
            NotificationTarget::Booking {
                trip_id,
                booking_id,
            } => format!("/trips/{trip_id}/bookings/{booking_id}"),
            NotificationTarget::Seat { trip_id, seat } => {
                format!("/trips/{trip_id}/seats?highlight={seat}")
            }
            NotificationTarget::Profile { user_id } => format!("/profile/{user_id}"),
        }
    }
}
