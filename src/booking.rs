// Bookings tie a guest to a room for a stay
//
// Both the guest and the room live independently of the booking. Stay dates are not
// checked against each other or against other bookings of the same room.

use crate::guest::{GuestAccount, GuestHandle};
use crate::room::RoomHandle;
use crate::shared::Shared;
use chrono::NaiveDate;

pub type BookingHandle = Shared<Booking>;

#[derive(Debug, Clone)]
pub struct Booking {
    booking_id: u32,
    guest: GuestHandle,
    room: RoomHandle,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    total_price: f64,
}

impl Booking {
    pub fn new(
        booking_id: u32,
        guest: GuestHandle,
        room: RoomHandle,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        total_price: f64,
    ) -> Self {
        Self {
            booking_id,
            guest,
            room,
            check_in_date,
            check_out_date,
            total_price,
        }
    }

    pub fn get_booking_id(&self) -> u32 {
        self.booking_id
    }

    pub fn get_guest(&self) -> &GuestHandle {
        &self.guest
    }

    pub fn get_room(&self) -> &RoomHandle {
        &self.room
    }

    pub fn get_check_in_date(&self) -> NaiveDate {
        self.check_in_date
    }

    pub fn set_check_in_date(&mut self, check_in_date: NaiveDate) {
        self.check_in_date = check_in_date;
    }

    pub fn get_check_out_date(&self) -> NaiveDate {
        self.check_out_date
    }

    pub fn set_check_out_date(&mut self, check_out_date: NaiveDate) {
        self.check_out_date = check_out_date;
    }

    pub fn get_total_price(&self) -> f64 {
        self.total_price
    }

    pub fn set_total_price(&mut self, total_price: f64) {
        self.total_price = total_price;
    }

    // Zero or negative when the dates are reversed
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    pub fn confirm_booking(&self) {
        self.room.write().set_availability(false);
        tracing::debug!(booking = self.booking_id, "booking confirmed");
    }

    pub fn cancel_booking(&self) {
        self.room.write().set_availability(true);
        tracing::debug!(booking = self.booking_id, "booking cancelled");
    }

    pub fn send_confirmation(&self) -> String {
        let guest_name = self.guest.read().get_name().to_string();
        let room_number = self.room.read().get_room_number();
        format!(
            "Booking confirmed: #{} for {} in room {} from {} to {}.",
            self.booking_id, guest_name, room_number, self.check_in_date, self.check_out_date
        )
    }

    // The total uses the same f64 Debug form as room prices
    pub fn generate_invoice(&self) -> String {
        let guest_name = self.guest.read().get_name().to_string();
        let (room_number, room_type) = {
            let room = self.room.read();
            (room.get_room_number(), room.get_type().to_string())
        };
        format!(
            "Invoice for booking #{}\nGuest: {}\nRoom: {} ({})\nStay: {} to {} ({} nights)\nTotal Amount: {:?}",
            self.booking_id,
            guest_name,
            room_number,
            room_type,
            self.check_in_date,
            self.check_out_date,
            self.nights(),
            self.total_price
        )
    }
}
