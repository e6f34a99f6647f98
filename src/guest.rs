// Guests and loyalty-tier guests
//
// `LoyalGuest` carries a full `Guest` and exposes the same profile through
// `GuestAccount`, so code written against "any guest" works for both.

use crate::error::{require, DomainError, Result};
use crate::shared::Shared;
use serde::Deserialize;
use std::fmt;

pub type GuestHandle = Shared<AnyGuest>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: String,
    contact_info: String,
    email: String,
    phone_number: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        contact_info: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Profile accessors shared by every kind of guest.
pub trait GuestAccount {
    fn profile(&self) -> &Guest;
    fn profile_mut(&mut self) -> &mut Guest;

    fn get_name(&self) -> &str {
        &self.profile().name
    }

    fn set_name(&mut self, name: String) {
        self.profile_mut().name = name;
    }

    fn get_contact_info(&self) -> &str {
        &self.profile().contact_info
    }

    fn set_contact_info(&mut self, contact_info: String) {
        self.profile_mut().contact_info = contact_info;
    }

    fn get_email(&self) -> &str {
        &self.profile().email
    }

    fn set_email(&mut self, email: String) {
        self.profile_mut().email = email;
    }

    fn get_phone_number(&self) -> &str {
        &self.profile().phone_number
    }

    fn set_phone_number(&mut self, phone_number: String) {
        self.profile_mut().phone_number = phone_number;
    }

    fn create_account(&self) -> Result<()> {
        tracing::warn!(guest = self.get_name(), "create_account is not implemented");
        Err(DomainError::unimplemented("Guest::create_account"))
    }

    fn view_history(&self) -> Result<()> {
        tracing::warn!(guest = self.get_name(), "view_history is not implemented");
        Err(DomainError::unimplemented("Guest::view_history"))
    }
}

impl GuestAccount for Guest {
    fn profile(&self) -> &Guest {
        self
    }

    fn profile_mut(&mut self) -> &mut Guest {
        self
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest: {}, Contact: {}, Email: {}, Phone: {}",
            self.name, self.contact_info, self.email, self.phone_number
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoyalGuest {
    guest: Guest,
    points_earned: i64,
    membership_level: String,
}

impl LoyalGuest {
    pub fn new(guest: Guest, points_earned: i64, membership_level: impl Into<String>) -> Self {
        Self {
            guest,
            points_earned,
            membership_level: membership_level.into(),
        }
    }

    pub fn get_points_earned(&self) -> i64 {
        self.points_earned
    }

    pub fn set_points_earned(&mut self, points: i64) {
        self.points_earned = points;
    }

    pub fn get_membership_level(&self) -> &str {
        &self.membership_level
    }

    pub fn set_membership_level(&mut self, level: impl Into<String>) {
        self.membership_level = level.into();
    }

    pub fn redeem_points(&mut self) -> Result<()> {
        tracing::warn!(guest = self.get_name(), "redeem_points is not implemented");
        Err(DomainError::unimplemented("LoyalGuest::redeem_points"))
    }
}

impl GuestAccount for LoyalGuest {
    fn profile(&self) -> &Guest {
        &self.guest
    }

    fn profile_mut(&mut self) -> &mut Guest {
        &mut self.guest
    }
}

impl fmt::Display for LoyalGuest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loyal Guest: {}, Membership: {}, Points: {}",
            self.get_name(),
            self.membership_level,
            self.points_earned
        )
    }
}

// What bookings, requests and feedback point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGuest {
    Regular(Guest),
    Loyal(LoyalGuest),
}

impl AnyGuest {
    pub fn is_loyal(&self) -> bool {
        matches!(self, AnyGuest::Loyal(_))
    }

    pub fn as_loyal(&self) -> Option<&LoyalGuest> {
        match self {
            AnyGuest::Loyal(loyal) => Some(loyal),
            AnyGuest::Regular(_) => None,
        }
    }

    pub fn as_loyal_mut(&mut self) -> Option<&mut LoyalGuest> {
        match self {
            AnyGuest::Loyal(loyal) => Some(loyal),
            AnyGuest::Regular(_) => None,
        }
    }

    pub fn into_handle(self) -> GuestHandle {
        GuestHandle::new(self)
    }
}

impl GuestAccount for AnyGuest {
    fn profile(&self) -> &Guest {
        match self {
            AnyGuest::Regular(guest) => guest,
            AnyGuest::Loyal(loyal) => loyal.profile(),
        }
    }

    fn profile_mut(&mut self) -> &mut Guest {
        match self {
            AnyGuest::Regular(guest) => guest,
            AnyGuest::Loyal(loyal) => loyal.profile_mut(),
        }
    }
}

impl From<Guest> for AnyGuest {
    fn from(guest: Guest) -> Self {
        AnyGuest::Regular(guest)
    }
}

impl From<LoyalGuest> for AnyGuest {
    fn from(guest: LoyalGuest) -> Self {
        AnyGuest::Loyal(guest)
    }
}

impl fmt::Display for AnyGuest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyGuest::Regular(guest) => fmt::Display::fmt(guest, f),
            AnyGuest::Loyal(loyal) => fmt::Display::fmt(loyal, f),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuestDraft {
    pub name: Option<String>,
    pub contact_info: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl TryFrom<GuestDraft> for Guest {
    type Error = DomainError;

    fn try_from(draft: GuestDraft) -> Result<Self> {
        Ok(Guest::new(
            require(draft.name, "Guest", "name")?,
            require(draft.contact_info, "Guest", "contact_info")?,
            require(draft.email, "Guest", "email")?,
            require(draft.phone_number, "Guest", "phone_number")?,
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoyalGuestDraft {
    #[serde(flatten)]
    pub guest: GuestDraft,
    pub points_earned: Option<i64>,
    pub membership_level: Option<String>,
}

impl TryFrom<LoyalGuestDraft> for LoyalGuest {
    type Error = DomainError;

    fn try_from(draft: LoyalGuestDraft) -> Result<Self> {
        let guest = Guest::try_from(draft.guest)?;
        Ok(LoyalGuest::new(
            guest,
            require(draft.points_earned, "LoyalGuest", "points_earned")?,
            require(draft.membership_level, "LoyalGuest", "membership_level")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fatima() -> Guest {
        Guest::new("Fatima", "Abu Dhabi", "fatima@example.com", "0501234567")
    }

    fn ahmed() -> LoyalGuest {
        LoyalGuest::new(
            Guest::new("Ahmed", "Dubai", "ahmed@example.com", "0507654321"),
            250,
            "Gold",
        )
    }

    // Works for anything that behaves like a guest
    fn shout_name(guest: &impl GuestAccount) -> String {
        guest.get_name().to_uppercase()
    }

    #[test]
    fn test_guest_accessors() {
        let mut guest = fatima();
        assert_eq!(guest.get_name(), "Fatima");
        assert_eq!(guest.get_email(), "fatima@example.com");

        guest.set_name("Fatima Al Mansoori".to_string());
        guest.set_contact_info("Al Reem Island".to_string());
        guest.set_email("fatima@mail.ae".to_string());
        guest.set_phone_number("0500000000".to_string());

        assert_eq!(guest.get_name(), "Fatima Al Mansoori");
        assert_eq!(guest.get_contact_info(), "Al Reem Island");
        assert_eq!(guest.get_email(), "fatima@mail.ae");
        assert_eq!(guest.get_phone_number(), "0500000000");
    }

    #[test]
    fn test_loyal_guest_is_a_guest() {
        let mut loyal = ahmed();
        assert_eq!(shout_name(&loyal), "AHMED");
        assert_eq!(shout_name(&fatima()), "FATIMA");

        loyal.set_phone_number("0509999999".to_string());
        loyal.set_points_earned(300);
        loyal.set_membership_level("Platinum");

        assert_eq!(loyal.get_phone_number(), "0509999999");
        assert_eq!(loyal.get_points_earned(), 300);
        assert_eq!(loyal.get_membership_level(), "Platinum");
    }

    #[test]
    fn test_placeholders_are_unimplemented() {
        let guest = fatima();
        assert_eq!(
            guest.create_account(),
            Err(DomainError::Unimplemented {
                operation: "Guest::create_account"
            })
        );
        assert_eq!(
            guest.view_history(),
            Err(DomainError::Unimplemented {
                operation: "Guest::view_history"
            })
        );

        let mut loyal = ahmed();
        assert!(matches!(
            loyal.create_account(),
            Err(DomainError::Unimplemented { .. })
        ));
        assert_eq!(
            loyal.redeem_points(),
            Err(DomainError::Unimplemented {
                operation: "LoyalGuest::redeem_points"
            })
        );
        assert_eq!(loyal.get_points_earned(), 250);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_placeholder_warns_when_called_not_when_built() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = DomainError::unimplemented("Guest::create_account");
            assert!(captured.0.lock().is_empty());

            let mut loyal = ahmed();
            let _ = loyal.view_history();
            let _ = loyal.redeem_points();
        });

        let logs = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert_eq!(logs.matches("view_history is not implemented").count(), 1);
        assert_eq!(logs.matches("redeem_points is not implemented").count(), 1);
        assert!(!logs.contains("create_account"));
    }

    #[test]
    fn test_any_guest() {
        let regular = AnyGuest::from(fatima());
        let mut loyal = AnyGuest::from(ahmed());

        assert!(!regular.is_loyal());
        assert!(loyal.is_loyal());
        assert!(regular.as_loyal().is_none());
        assert_eq!(loyal.get_name(), "Ahmed");

        loyal.as_loyal_mut().unwrap().set_points_earned(10);
        assert_eq!(loyal.as_loyal().unwrap().get_points_earned(), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            fatima().to_string(),
            "Guest: Fatima, Contact: Abu Dhabi, Email: fatima@example.com, Phone: 0501234567"
        );
        assert_eq!(
            AnyGuest::from(ahmed()).to_string(),
            "Loyal Guest: Ahmed, Membership: Gold, Points: 250"
        );
    }

    #[test]
    fn test_loyal_guest_draft() {
        let draft: LoyalGuestDraft = serde_json::from_str(
            r#"{"name": "Ahmed", "contact_info": "Dubai", "email": "ahmed@example.com",
                "phone_number": "0507654321", "points_earned": 250, "membership_level": "Gold"}"#,
        )
        .unwrap();
        assert_eq!(LoyalGuest::try_from(draft).unwrap(), ahmed());

        let draft: LoyalGuestDraft = serde_json::from_str(
            r#"{"name": "Ahmed", "contact_info": "Dubai", "phone_number": "0507654321",
                "points_earned": 250, "membership_level": "Gold"}"#,
        )
        .unwrap();
        assert_eq!(
            LoyalGuest::try_from(draft).unwrap_err(),
            DomainError::missing("Guest", "email")
        );
    }

    #[test]
    fn test_guest_draft_missing_field() {
        let draft = GuestDraft {
            name: Some("Fatima".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Guest::try_from(draft).unwrap_err(),
            DomainError::missing("Guest", "contact_info")
        );
    }
}
