//! Status and priority enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table, and each variant carries the wire
//! code stored in that table's `code` column. Values on the wire are the
//! codes (`"ACTIVE"`, `"IN_PROGRESS"`, ...); values in entity tables are
//! the SMALLINT ids.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// The wire code for this variant, as seeded in the lookup table.
            pub fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            /// Parse a wire code; anything outside the fixed set is `None`.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Active = 1 => "ACTIVE",
        Completed = 2 => "COMPLETED",
        OnHold = 3 => "ON_HOLD",
        Cancelled = 4 => "CANCELLED",
    }
}

define_status_enum! {
    /// Task workflow status.
    TaskStatus {
        Todo = 1 => "TODO",
        InProgress = 2 => "IN_PROGRESS",
        Done = 3 => "DONE",
        Blocked = 4 => "BLOCKED",
    }
}

define_status_enum! {
    /// Task priority level. Ordering by id gives LOW < MEDIUM < HIGH < URGENT,
    /// which the task list ordering relies on.
    TaskPriority {
        Low = 1 => "LOW",
        Medium = 2 => "MEDIUM",
        High = 3 => "HIGH",
        Urgent = 4 => "URGENT",
    }
}
