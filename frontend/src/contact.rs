//! The "Request Service" form: an in-memory draft and the collaborator
//! that receives it.

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Location,
    Issue,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::FirstName, Field::LastName, Field::Phone, Field::Location, Field::Issue];

    /// The `name` attribute of the matching form control.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Phone => "phone",
            Field::Location => "location",
            Field::Issue => "issue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Phone => "Phone Number",
            Field::Location => "Your Location",
            Field::Issue => "Issue Description",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.input_name() == name)
            .ok_or_else(|| UnknownField(name.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
    pub issue_description: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl ValidationError {
    pub fn labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(|field| field.label()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "please fill in: {}", self.labels().join(", "))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("request could not be sent: {0}")]
    Rejected(String),
}

/// Receives validated leads.
pub trait LeadSink {
    fn send(&self, draft: &ContactFormDraft) -> Result<(), String>;
}

/// Logs the lead instead of sending it anywhere.
pub struct ConsoleLeadSink;

impl LeadSink for ConsoleLeadSink {
    fn send(&self, draft: &ContactFormDraft) -> Result<(), String> {
        let payload = serde_json::to_string(draft).map_err(|e| e.to_string())?;
        info!("Form submitted: {}", payload);
        Ok(())
    }
}

impl ContactFormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::Issue => &self.issue_description,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Location => &mut self.location,
            Field::Issue => &mut self.issue_description,
        };
        *slot = value.into();
    }

    /// Every field is required; whitespace alone does not count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<Field> = Field::ALL.into_iter().filter(|f| self.get(*f).trim().is_empty()).collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Hands the draft to `sink` and clears it once the sink accepts.
    pub fn submit(&mut self, sink: &dyn LeadSink) -> Result<(), SubmitError> {
        self.validate()?;
        sink.send(self).map_err(SubmitError::Rejected)?;
        *self = ContactFormDraft::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<ContactFormDraft>>,
        reject: bool,
    }

    impl LeadSink for RecordingSink {
        fn send(&self, draft: &ContactFormDraft) -> Result<(), String> {
            if self.reject {
                return Err("offline".to_string());
            }
            self.received.borrow_mut().push(draft.clone());
            Ok(())
        }
    }

    fn filled() -> ContactFormDraft {
        let mut draft = ContactFormDraft::default();
        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lopez"),
            ("phone", "559-555-0100"),
            ("location", "Hwy 99 mile 120"),
            ("issue", "Air brake leak"),
        ] {
            draft.update_field(name.parse().unwrap(), value);
        }
        draft
    }

    #[test]
    fn field_names_match_form_inputs() {
        assert_eq!("issue".parse::<Field>(), Ok(Field::Issue));
        assert_eq!("firstName".parse::<Field>(), Ok(Field::FirstName));
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn validate_lists_blank_fields() {
        let mut draft = filled();
        draft.update_field(Field::Phone, "   ");
        draft.update_field(Field::Issue, "");
        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing, vec![Field::Phone, Field::Issue]);
        assert_eq!(err.to_string(), "please fill in: Phone Number, Issue Description");
    }

    #[test]
    fn incomplete_draft_is_kept() {
        let sink = RecordingSink::default();
        let mut draft = filled();
        draft.update_field(Field::Location, "");
        let before = draft.clone();

        assert!(matches!(draft.submit(&sink), Err(SubmitError::Invalid(_))));
        assert_eq!(draft, before);
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn complete_draft_reaches_sink_and_clears() {
        let sink = RecordingSink::default();
        let mut draft = filled();
        let sent = draft.clone();

        assert_eq!(draft.submit(&sink), Ok(()));
        assert_eq!(sink.received.borrow().as_slice(), &[sent]);
        assert_eq!(draft, ContactFormDraft::default());
    }

    #[test]
    fn rejected_submission_keeps_draft() {
        let sink = RecordingSink { reject: true, ..Default::default() };
        let mut draft = filled();
        let before = draft.clone();

        assert_eq!(draft.submit(&sink), Err(SubmitError::Rejected("offline".to_string())));
        assert_eq!(draft, before);
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["issueDescription"], "Air brake leak");
    }
}
