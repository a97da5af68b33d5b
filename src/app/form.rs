//! Form state for the shared create/edit screen.
//!
//! The form holds its fields as editable text buffers plus a cycled status
//! value, tracks which field has focus, and assembles an [`EventDraft`] on
//! submit. Prior contents are never cleared on failure, so the user can fix
//! a rejected submission in place.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

use crate::domain::error::{EventdeckError, Result};
use crate::domain::{EventDraft, EventRecord, EventStatus};

/// Date format used in the editable Start/End fields.
const FORM_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Whether the form creates a new event or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting posts a new event; the server assigns the id.
    Create,
    /// Submitting replaces every field of the identified event.
    Edit(i64),
}

/// The focusable fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Start,
    End,
    Price,
    Status,
}

impl FormField {
    const ORDER: [Self; 5] = [
        Self::Title,
        Self::Start,
        Self::End,
        Self::Price,
        Self::Status,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The next field in traversal order, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// The previous field in traversal order, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Display label for the field row.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Start => "Start",
            Self::End => "End",
            Self::Price => "Price",
            Self::Status => "Status",
        }
    }
}

/// Editable state of the create/edit form.
///
/// Text fields are plain string buffers; dates are edited in
/// `YYYY-MM-DD HH:MM` form (RFC 3339 is also accepted on submit) and
/// converted to wire timestamps only when the draft is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub title: String,
    pub start: String,
    pub end: String,
    pub price: String,
    pub status: EventStatus,
    pub focus: FormField,
}

impl FormState {
    /// Creates the form with creation defaults: empty title, start = now,
    /// end = now + 1 hour, empty price, status Started.
    #[must_use]
    pub fn for_create(now: DateTime<Utc>) -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            start: format_form_date(&now),
            end: format_form_date(&(now + Duration::hours(1))),
            price: String::new(),
            status: EventStatus::default(),
            focus: FormField::Title,
        }
    }

    /// Pre-fills the form from an existing record for editing.
    #[must_use]
    pub fn for_edit(event: &EventRecord) -> Self {
        Self {
            mode: FormMode::Edit(event.id),
            title: event.title.clone(),
            start: format_form_date(&event.start_date),
            end: format_form_date(&event.end_date),
            price: format!("{}", event.price),
            status: event.status.clone(),
            focus: FormField::Title,
        }
    }

    /// Screen heading for this form's mode.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create New Event",
            FormMode::Edit(_) => "Edit Event",
        }
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Appends a character to the focused text field.
    ///
    /// The status field is cycled, not typed; characters are ignored there.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Start => self.start.push(c),
            FormField::End => self.end.push(c),
            FormField::Price => self.price.push(c),
            FormField::Status => {}
        }
    }

    /// Removes the last character from the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Start => {
                self.start.pop();
            }
            FormField::End => {
                self.end.pop();
            }
            FormField::Price => {
                self.price.pop();
            }
            FormField::Status => {}
        }
    }

    /// Cycles the status forward (Started → Completed → Paused → …).
    pub fn status_next(&mut self) {
        self.status = self.status.cycled_forward();
    }

    /// Cycles the status back.
    pub fn status_previous(&mut self) {
        self.status = self.status.cycled_back();
    }

    /// Returns the text buffer of a field, or the status label.
    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Start => self.start.clone(),
            FormField::End => self.end.clone(),
            FormField::Price => self.price.clone(),
            FormField::Status => self.status.label().to_string(),
        }
    }

    /// Assembles the draft, converting dates to wire form.
    ///
    /// Checks mirror the server's own messages so a rejected field reads the
    /// same whether it was caught locally or remotely. End ≥ start is not
    /// enforced here; the server owns that rule.
    ///
    /// # Errors
    ///
    /// Returns [`EventdeckError::InvalidInput`] carrying every field problem
    /// joined with `", "`.
    pub fn to_draft(&self) -> Result<EventDraft> {
        let mut problems = Vec::new();

        if self.title.trim().is_empty() {
            problems.push("Title is required".to_string());
        }

        let start = parse_form_date(&self.start);
        if start.is_none() {
            problems.push(format!(
                "Start date must look like {}",
                example_form_date()
            ));
        }

        let end = parse_form_date(&self.end);
        if end.is_none() {
            problems.push(format!("End date must look like {}", example_form_date()));
        }

        let price = if self.price.trim().is_empty() {
            problems.push("Price is required".to_string());
            None
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(value) if value >= 0.0 => Some(value),
                Ok(_) => {
                    problems.push("Price must be greater than or equal to 0".to_string());
                    None
                }
                Err(_) => {
                    problems.push("Price must be a number".to_string());
                    None
                }
            }
        };

        if !problems.is_empty() {
            return Err(EventdeckError::InvalidInput(problems.join(", ")));
        }

        // All three are Some once problems is empty.
        let (Some(start), Some(end), Some(price)) = (start, end, price) else {
            return Err(EventdeckError::InvalidInput(
                "Form could not be assembled".to_string(),
            ));
        };

        Ok(EventDraft {
            title: self.title.trim().to_string(),
            start_date: start,
            end_date: end,
            price,
            status: self.status.clone(),
        })
    }
}

/// Formats a timestamp for the editable date fields.
#[must_use]
pub fn format_form_date(ts: &DateTime<Utc>) -> String {
    ts.format(FORM_DATE_FORMAT).to_string()
}

/// Parses an editable date field back to a wire timestamp.
///
/// Accepts the form's own `YYYY-MM-DD HH:MM` layout (with optional seconds)
/// as UTC, and full RFC 3339 strings.
#[must_use]
pub fn parse_form_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, FORM_DATE_FORMAT) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    None
}

fn example_form_date() -> &'static str {
    "2024-01-31 18:00"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn create_defaults_are_empty_title_started_and_one_hour_window() {
        let form = FormState::for_create(now());
        assert_eq!(form.title, "");
        assert_eq!(form.price, "");
        assert_eq!(form.status, EventStatus::Started);

        let start = parse_form_date(&form.start).unwrap();
        let end = parse_form_date(&form.end).unwrap();
        assert_eq!(end - start, Duration::hours(1));
        assert_eq!(start, now());
    }

    #[test]
    fn edit_prefills_from_the_record() {
        let record = EventRecord {
            id: 12,
            title: "Vinyl swap".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 2, 2, 16, 0, 0).unwrap(),
            price: 5.0,
            status: EventStatus::Paused,
        };
        let form = FormState::for_edit(&record);
        assert_eq!(form.mode, FormMode::Edit(12));
        assert_eq!(form.title, "Vinyl swap");
        assert_eq!(form.start, "2024-02-02 10:00");
        assert_eq!(form.price, "5");
        assert_eq!(form.status, EventStatus::Paused);
        assert_eq!(form.heading(), "Edit Event");
    }

    #[test]
    fn valid_form_assembles_a_draft() {
        let mut form = FormState::for_create(now());
        form.title = "Launch".to_string();
        form.price = "25.00".to_string();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.title, "Launch");
        assert!((draft.price - 25.0).abs() < f64::EPSILON);
        assert_eq!(draft.start_date, now());
    }

    #[test]
    fn problems_are_joined_with_commas() {
        let mut form = FormState::for_create(now());
        form.start = "whenever".to_string();
        form.price = "-3".to_string();
        let err = form.to_draft().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Title is required"));
        assert!(message.contains("Start date must look like"));
        assert!(message.contains("Price must be greater than or equal to 0"));
        assert!(message.matches(", ").count() >= 2);
    }

    #[test]
    fn rfc3339_dates_are_accepted() {
        let parsed = parse_form_date("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn field_traversal_wraps() {
        let mut form = FormState::for_create(now());
        assert_eq!(form.focus, FormField::Title);
        form.focus_previous();
        assert_eq!(form.focus, FormField::Status);
        form.focus_next();
        assert_eq!(form.focus, FormField::Title);
    }
}
