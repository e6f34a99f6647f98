// Payments against a booking; no gateway, no ledger

use crate::booking::BookingHandle;

#[derive(Debug, Clone)]
pub struct Payment {
    payment_id: u32,
    booking: BookingHandle,
    amount: f64,
    method: String,
}

impl Payment {
    pub fn new(payment_id: u32, booking: BookingHandle, amount: f64, method: impl Into<String>) -> Self {
        Self {
            payment_id,
            booking,
            amount,
            method: method.into(),
        }
    }

    pub fn get_payment_id(&self) -> u32 {
        self.payment_id
    }

    pub fn get_booking(&self) -> &BookingHandle {
        &self.booking
    }

    pub fn get_amount(&self) -> f64 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn get_method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }

    /// Every call succeeds and reports the same message; nothing is recorded.
    /// The amount is printed like `Room`'s price, e.g. `250.0`.
    pub fn process_payment(&self) -> String {
        tracing::debug!(payment = self.payment_id, amount = self.amount, "payment processed");
        format!(
            "Payment of {:?} via {} processed successfully.",
            self.amount, self.method
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Booking;
    use crate::guest::{AnyGuest, Guest};
    use crate::room::{Room, RoomHandle};
    use chrono::NaiveDate;
    use test_case::test_case;

    fn booking() -> BookingHandle {
        let guest = AnyGuest::from(Guest::new("Ahmed", "Dubai", "ahmed@example.com", "0507654321"));
        BookingHandle::new(Booking::new(
            1,
            guest.into_handle(),
            RoomHandle::new(Room::new(101, "Deluxe", 500.0, true)),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            250.0,
        ))
    }

    #[test_case(250.0, "Credit Card", "Payment of 250.0 via Credit Card processed successfully."; "#1 whole amount")]
    #[test_case(3000.75, "Mobile Wallet", "Payment of 3000.75 via Mobile Wallet processed successfully."; "#2 fractional amount")]
    #[test_case(1e16, "Wire", "Payment of 1e16 via Wire processed successfully."; "#3 large amount in exponent form")]
    fn test_process_payment(amount: f64, method: &str, expected: &str) {
        let payment = Payment::new(1, booking(), amount, method);
        assert_eq!(payment.process_payment(), expected);
        // Processing twice is allowed and changes nothing
        assert_eq!(payment.process_payment(), expected);
    }

    #[test]
    fn test_accessors() {
        let booking = booking();
        let mut payment = Payment::new(9, booking.clone(), 250.0, "Credit Card");
        assert_eq!(payment.get_payment_id(), 9);
        assert!(payment.get_booking().ptr_eq(&booking));

        payment.set_amount(300.0);
        payment.set_method("Cash");
        assert_eq!(payment.get_amount(), 300.0);
        assert_eq!(payment.get_method(), "Cash");
    }

    #[test]
    fn test_booking_updates_visible_through_payment() {
        let booking = booking();
        let payment = Payment::new(1, booking.clone(), 250.0, "Credit Card");

        booking.write().set_total_price(400.0);
        assert_eq!(payment.get_booking().read().get_total_price(), 400.0);
    }
}
