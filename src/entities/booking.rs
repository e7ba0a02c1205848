use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub pickup: String,
    pub dropoff: String,
    pub driver_id: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Booked,
    Cancelled { cancelled_at: DateTime<Utc> },
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Booked => "booked".into(),
            Self::Cancelled { cancelled_at: _ } => "cancelled".into(),
        }
    }
}

impl Booking {
    pub fn new(id: Uuid, pickup: String, dropoff: String, driver_id: String) -> Self {
        Self {
            id,
            pickup,
            dropoff,
            driver_id,
            status: Status::Booked,
            created_at: Utc::now(),
        }
    }

    pub fn is_booked(&self) -> bool {
        matches!(self.status, Status::Booked)
    }

    pub fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            Status::Cancelled { cancelled_at } => Some(cancelled_at),
            Status::Booked => None,
        }
    }

    /// Moves a booked ride to cancelled. Returns false, leaving the booking
    /// untouched, when it was already cancelled.
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn cancel(&mut self) -> bool {
        match self.status {
            Status::Booked => {
                self.status = Status::Cancelled {
                    cancelled_at: Utc::now(),
                };
                true
            }
            Status::Cancelled { cancelled_at: _ } => false,
        }
    }
}
