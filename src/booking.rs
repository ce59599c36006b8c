//! Availability search links.
//!
//! The hero banner carries a small search form. Submitting it does not post
//! anywhere: it navigates to the availability route with the form fields as
//! query parameters. [`BookingRequest::availability_url`] builds that target
//! and is the reference for the form script embedded in generated pages
//! (`static/booking.js`), which applies the same rules in the browser.
//!
//! ## Query Layout
//!
//! ```text
//! /availability?checkIn=2025-06-01&checkOut=2025-06-03&rooms=1&adults=2&children=0&name=
//! ```
//!
//! Parameters always appear in this order. `name` is always present, even
//! when empty; `phone` is appended only when one was entered. Values are
//! form-urlencoded, so spaces become `+`.
//!
//! The only validation is that both dates are filled in. Dates are passed
//! through as entered; the availability page owns their interpretation.

use crate::config::BookingConfig;
use thiserror::Error;
use url::form_urlencoded;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please select both check-in and check-out dates")]
    MissingDates,
}

/// Fields of the hero search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
}

impl BookingRequest {
    /// An empty form with the configured default counts.
    pub fn with_defaults(config: &BookingConfig) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            rooms: config.default_rooms,
            adults: config.default_adults,
            children: config.default_children,
        }
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        if self.check_in.trim().is_empty() || self.check_out.trim().is_empty() {
            return Err(BookingError::MissingDates);
        }
        Ok(())
    }

    /// Navigation target for this request under `path` (e.g. `/availability`).
    pub fn availability_url(&self, path: &str) -> Result<String, BookingError> {
        self.validate()?;

        let rooms = self.rooms.to_string();
        let adults = self.adults.to_string();
        let children = self.children.to_string();

        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("checkIn", self.check_in.trim())
            .append_pair("checkOut", self.check_out.trim())
            .append_pair("rooms", &rooms)
            .append_pair("adults", &adults)
            .append_pair("children", &children)
            .append_pair("name", self.name.trim());
        if !self.phone.trim().is_empty() {
            query.append_pair("phone", self.phone.trim());
        }

        Ok(format!("{}?{}", path, query.finish()))
    }
}
