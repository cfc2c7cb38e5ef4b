/// Whether the guest accepted the invitation. An explicit two-state
/// choice: "unset" only exists at the form boundary as
/// `Option<Attendance>`, never inside a validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Accepted,
    Declined,
}

impl Attendance {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Raw form values as captured at the page boundary, before validation.
///
/// `None` fields mean the guest left them unanswered — the validator
/// turns those into per-field "required" errors.
#[derive(Debug, Clone, Default)]
pub struct RsvpForm {
    pub first_name: String,
    pub last_name: String,
    pub people_amount: Option<u8>,
    pub attendance: Option<Attendance>,
}

/// A validated RSVP. Invalid input never reaches the pipeline: the only
/// way to construct this type is through [`crate::validate::validate`].
#[derive(Debug, Clone)]
pub struct RsvpInput {
    pub first_name: String,
    pub last_name: String,
    pub people_amount: u8,
    pub attendance: Attendance,
}
