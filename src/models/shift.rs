//! Shift text parsing.
//!
//! Shifts are stored as free text of the form `"HH:MM to HH:MM"` on a 24-hour
//! clock. Only the start of the shift carries meaning for validation: the first
//! whitespace-delimited token identifies the shift slot, and the hour before
//! its `:` is checked against the permitted start hours.

/// The parsed start of a shift.
///
/// Borrows the slot token from the original shift text.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftStart;
///
/// let start = ShiftStart::parse("08:00 to 16:00").unwrap();
/// assert_eq!(start.token, "08:00");
/// assert_eq!(start.hour, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftStart<'a> {
    /// The first whitespace-delimited token, used as the shift slot key.
    pub token: &'a str,
    /// The hour component of the token.
    pub hour: u32,
}

impl<'a> ShiftStart<'a> {
    /// Parses the start token and hour from shift text.
    ///
    /// Minutes and the end of the shift are not inspected. On failure the
    /// returned string describes what was wrong with the text.
    pub fn parse(shift: &'a str) -> Result<Self, &'static str> {
        let token = shift
            .split_whitespace()
            .next()
            .ok_or("shift text is empty")?;

        let (hour, _minutes) = token
            .split_once(':')
            .ok_or("start time is missing ':' separator")?;

        // Digit strings too long for u32 saturate; no permitted hour is that large.
        let hour = match hour.parse::<u32>() {
            Ok(hour) => hour,
            Err(_) if !hour.is_empty() && hour.bytes().all(|b| b.is_ascii_digit()) => u32::MAX,
            Err(_) => return Err("start hour is not a number"),
        };

        Ok(Self { token, hour })
    }
}
