//! Booking status enums, stored as lowercase text

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Implements `as_str`, `Display`, `FromStr` and the sqlx text mapping for a
/// fieldless enum.
macro_rules! text_enum {
    ($name:ident, $label:literal, { $($variant:ident => $slug:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $slug,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($slug => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {}", $label, s)),
                }
            }
        }

        impl sqlx::Type<Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = Decode::<Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

/// Reservation lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Inquiry,
    Reserved,
    Confirmed,
    Cancelled,
}

text_enum!(BookingStatus, "booking status", {
    Inquiry => "inquiry",
    Reserved => "reserved",
    Confirmed => "confirmed",
    Cancelled => "cancelled",
});

/// Channel the booking came in through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingSource {
    #[default]
    Airbnb,
    Booking,
    Private,
}

text_enum!(BookingSource, "booking source", {
    Airbnb => "airbnb",
    Booking => "booking",
    Private => "private",
});

/// Payment state of the rental price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

text_enum!(PaymentStatus, "payment status", {
    Unpaid => "unpaid",
    Partial => "partial",
    Paid => "paid",
});

/// Processing state of the Kurtaxe with the municipality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum KurtaxeStatus {
    #[default]
    Open,
    Entered,
    Released,
    Paid,
}

text_enum!(KurtaxeStatus, "kurtaxe status", {
    Open => "open",
    Entered => "entered",
    Released => "released",
    Paid => "paid",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("CONFIRMED".parse::<BookingStatus>(), Ok(BookingStatus::Confirmed));
        assert_eq!("Airbnb".parse::<BookingSource>(), Ok(BookingSource::Airbnb));
        assert_eq!("partial".parse::<PaymentStatus>(), Ok(PaymentStatus::Partial));
        assert_eq!("Released".parse::<KurtaxeStatus>(), Ok(KurtaxeStatus::Released));
    }

    #[test]
    fn test_parse_unknown() {
        assert!("expired".parse::<BookingStatus>().is_err());
        assert!("fewo-direkt".parse::<BookingSource>().is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(KurtaxeStatus::Entered.to_string(), "entered");
        assert_eq!(
            serde_json::to_string(&KurtaxeStatus::Entered).unwrap(),
            "\"entered\""
        );
        assert_eq!(BookingStatus::default(), BookingStatus::Inquiry);
    }
}
