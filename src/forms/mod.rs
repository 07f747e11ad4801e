//! Typed student form state.
//!
//! Fields are addressed through [`StudentField`] instead of runtime
//! property paths, so every update is checked at compile time while a
//! single `set` still reaches any nested field.
//!
//! # Example
//!
//! ```
//! use academy::core::ValidationResult;
//! use academy::forms::*;
//!
//! let mut form = StudentForm::default();
//! form.set(StudentField::Iban, "ES91 2100 0418 4502 0005 1332");
//! assert_eq!(form.blur(StudentField::Iban), ValidationResult::Valid);
//! assert_eq!(form.get(StudentField::Bic), "CAIXESBBXXX");
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::core::{
    AcademyError, AddressBuilder, DocumentKind, Student, StudentBuilder, ValidationResult,
    is_valid_document_number, is_valid_iban, resolve_bank_identifier,
};

/// Form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSection {
    Personal,
    Contact,
    Billing,
}

impl FormSection {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Contact => "contact",
            Self::Billing => "billing",
        }
    }
}

/// Every editable field of the student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    FirstName,
    LastName,
    DocumentNumber,
    BirthDate,
    Email,
    Phone,
    Street,
    City,
    PostalCode,
    Province,
    Iban,
    Bic,
    AccountHolder,
}

impl StudentField {
    pub const ALL: &'static [StudentField] = &[
        Self::FirstName,
        Self::LastName,
        Self::DocumentNumber,
        Self::BirthDate,
        Self::Email,
        Self::Phone,
        Self::Street,
        Self::City,
        Self::PostalCode,
        Self::Province,
        Self::Iban,
        Self::Bic,
        Self::AccountHolder,
    ];

    pub fn section(&self) -> FormSection {
        match self {
            Self::FirstName | Self::LastName | Self::DocumentNumber | Self::BirthDate => {
                FormSection::Personal
            }
            Self::Email
            | Self::Phone
            | Self::Street
            | Self::City
            | Self::PostalCode
            | Self::Province => FormSection::Contact,
            Self::Iban | Self::Bic | Self::AccountHolder => FormSection::Billing,
        }
    }

    /// Field name within its section.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::DocumentNumber => "document_number",
            Self::BirthDate => "birth_date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Street => "street",
            Self::City => "city",
            Self::PostalCode => "postal_code",
            Self::Province => "province",
            Self::Iban => "iban",
            Self::Bic => "bic",
            Self::AccountHolder => "account_holder",
        }
    }

    /// Dotted path, e.g. "billing.iban".
    pub fn path(&self) -> String {
        format!("{}.{}", self.section().key(), self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalSection {
    pub first_name: String,
    pub last_name: String,
    pub document_kind: DocumentKind,
    pub document_number: String,
    /// ISO date ("YYYY-MM-DD") as typed.
    pub birth_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSection {
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub province: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingSection {
    pub iban: String,
    pub bic: String,
    pub account_holder: String,
}

/// Results of the blur-time checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldChecks {
    pub document_number: ValidationResult,
    pub iban: ValidationResult,
}

/// Editable student form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub personal: PersonalSection,
    pub contact: ContactSection,
    pub billing: BillingSection,
    pub checks: FieldChecks,
}

impl StudentForm {
    /// Pre-fill the form from an existing student.
    pub fn from_student(student: &Student) -> Self {
        let mut form = Self::default();
        form.personal.first_name = student.first_name.clone();
        form.personal.last_name = student.last_name.clone();
        form.personal.document_kind = student.document_kind;
        form.personal.document_number = student.document_number.clone();
        form.personal.birth_date = student
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        form.contact.email = student.email.clone().unwrap_or_default();
        form.contact.phone = student.phone.clone().unwrap_or_default();
        if let Some(address) = &student.address {
            form.contact.street = address.street.clone().unwrap_or_default();
            form.contact.city = address.city.clone();
            form.contact.postal_code = address.postal_code.clone();
            form.contact.province = address.province.clone().unwrap_or_default();
        }
        if let Some(account) = &student.bank_account {
            form.billing.iban = account.iban.clone();
            form.billing.bic = account.bic.clone().unwrap_or_default();
            form.billing.account_holder = account.holder.clone().unwrap_or_default();
        }
        form
    }

    fn slot_mut(&mut self, field: StudentField) -> &mut String {
        match field {
            StudentField::FirstName => &mut self.personal.first_name,
            StudentField::LastName => &mut self.personal.last_name,
            StudentField::DocumentNumber => &mut self.personal.document_number,
            StudentField::BirthDate => &mut self.personal.birth_date,
            StudentField::Email => &mut self.contact.email,
            StudentField::Phone => &mut self.contact.phone,
            StudentField::Street => &mut self.contact.street,
            StudentField::City => &mut self.contact.city,
            StudentField::PostalCode => &mut self.contact.postal_code,
            StudentField::Province => &mut self.contact.province,
            StudentField::Iban => &mut self.billing.iban,
            StudentField::Bic => &mut self.billing.bic,
            StudentField::AccountHolder => &mut self.billing.account_holder,
        }
    }

    /// Current value of `field`.
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.personal.first_name,
            StudentField::LastName => &self.personal.last_name,
            StudentField::DocumentNumber => &self.personal.document_number,
            StudentField::BirthDate => &self.personal.birth_date,
            StudentField::Email => &self.contact.email,
            StudentField::Phone => &self.contact.phone,
            StudentField::Street => &self.contact.street,
            StudentField::City => &self.contact.city,
            StudentField::PostalCode => &self.contact.postal_code,
            StudentField::Province => &self.contact.province,
            StudentField::Iban => &self.billing.iban,
            StudentField::Bic => &self.billing.bic,
            StudentField::AccountHolder => &self.billing.account_holder,
        }
    }

    /// Write `value` into `field`. Editing a checked field resets its check.
    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
        match field {
            StudentField::DocumentNumber => self.checks.document_number = ValidationResult::Unchecked,
            StudentField::Iban => self.checks.iban = ValidationResult::Unchecked,
            _ => {}
        }
    }

    pub fn set_document_kind(&mut self, kind: DocumentKind) {
        self.personal.document_kind = kind;
    }

    /// Run the check attached to `field`, if any, and record its result.
    ///
    /// A valid IBAN whose bank code is known fills in an empty BIC field.
    /// Fields without a check return `Unchecked`.
    pub fn blur(&mut self, field: StudentField) -> ValidationResult {
        match field {
            StudentField::DocumentNumber => {
                let value = self.personal.document_number.trim();
                let result = ValidationResult::from_bool(is_valid_document_number(value));
                debug!(field = %field.path(), ?result, "document number checked");
                self.checks.document_number = result;
                result
            }
            StudentField::Iban => {
                let iban = self.billing.iban.trim().to_string();
                let result = ValidationResult::from_bool(is_valid_iban(&iban));
                if result.is_valid() && self.billing.bic.trim().is_empty() {
                    if let Some(bic) = resolve_bank_identifier(&iban) {
                        debug!(bic, "bank identifier resolved from IBAN");
                        self.billing.bic = bic.to_string();
                    }
                }
                debug!(field = %field.path(), ?result, "IBAN checked");
                self.checks.iban = result;
                result
            }
            _ => ValidationResult::Unchecked,
        }
    }

    /// Whether any blur-time check has failed.
    pub fn has_failed_checks(&self) -> bool {
        self.checks.document_number == ValidationResult::Invalid
            || self.checks.iban == ValidationResult::Invalid
    }

    /// Build a validated student from the form contents.
    ///
    /// Blank optional fields become `None`. The address and bank account
    /// are omitted only when every one of their fields is blank; a partly
    /// filled section is validated like any other, so a missing city or
    /// IBAN is reported instead of dropping the rest of the section.
    pub fn into_student(
        self,
        id: impl Into<String>,
        enrolled_on: NaiveDate,
    ) -> Result<Student, AcademyError> {
        let StudentForm {
            personal,
            contact,
            billing,
            ..
        } = self;

        let mut builder = StudentBuilder::new(
            id,
            personal.first_name.trim(),
            personal.last_name.trim(),
            personal.document_number.trim(),
            enrolled_on,
        )
        .document_kind(personal.document_kind);

        if let Some(raw) = non_blank(&personal.birth_date) {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                AcademyError::Validation(format!(
                    "{}: '{raw}' is not a date: {e}",
                    StudentField::BirthDate.path()
                ))
            })?;
            builder = builder.birth_date(date);
        }
        if let Some(email) = non_blank(&contact.email) {
            builder = builder.email(email);
        }
        if let Some(phone) = non_blank(&contact.phone) {
            builder = builder.phone(phone);
        }
        let address_fields = [
            &contact.city,
            &contact.postal_code,
            &contact.street,
            &contact.province,
        ];
        if address_fields.iter().any(|v| non_blank(v).is_some()) {
            let mut address = AddressBuilder::new(contact.city.trim(), contact.postal_code.trim());
            if let Some(street) = non_blank(&contact.street) {
                address = address.street(street);
            }
            if let Some(province) = non_blank(&contact.province) {
                address = address.province(province);
            }
            builder = builder.address(address.build());
        }
        let account_fields = [&billing.iban, &billing.bic, &billing.account_holder];
        if account_fields.iter().any(|v| non_blank(v).is_some()) {
            builder = builder.bank_account(billing.iban.trim(), non_blank(&billing.bic));
            if let Some(holder) = non_blank(&billing.account_holder) {
                builder = builder.account_holder(holder);
            }
        }

        builder.build()
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_section_qualified() {
        assert_eq!(StudentField::Iban.path(), "billing.iban");
        assert_eq!(StudentField::City.path(), "contact.city");
        assert_eq!(StudentField::DocumentNumber.path(), "personal.document_number");
    }

    #[test]
    fn set_and_get_every_field() {
        let mut form = StudentForm::default();
        for (i, field) in StudentField::ALL.iter().enumerate() {
            form.set(*field, format!("v{i}"));
        }
        for (i, field) in StudentField::ALL.iter().enumerate() {
            assert_eq!(form.get(*field), format!("v{i}"));
        }
    }

    #[test]
    fn document_blur() {
        let mut form = StudentForm::default();
        form.set(StudentField::DocumentNumber, " 12345678z ");
        assert_eq!(form.blur(StudentField::DocumentNumber), ValidationResult::Valid);
        form.set(StudentField::DocumentNumber, "12345678A");
        assert_eq!(form.checks.document_number, ValidationResult::Unchecked);
        assert_eq!(form.blur(StudentField::DocumentNumber), ValidationResult::Invalid);
        assert!(form.has_failed_checks());
    }

    #[test]
    fn iban_blur_prefills_bic() {
        let mut form = StudentForm::default();
        form.set(StudentField::Iban, "ES9121000418450200051332");
        assert_eq!(form.blur(StudentField::Iban), ValidationResult::Valid);
        assert_eq!(form.billing.bic, "CAIXESBBXXX");
    }

    #[test]
    fn iban_blur_keeps_typed_bic() {
        let mut form = StudentForm::default();
        form.set(StudentField::Bic, "CAIXESBB");
        form.set(StudentField::Iban, "ES9121000418450200051332");
        form.blur(StudentField::Iban);
        assert_eq!(form.billing.bic, "CAIXESBB");
    }

    #[test]
    fn invalid_iban_does_not_prefill() {
        let mut form = StudentForm::default();
        form.set(StudentField::Iban, "ES9121000418450200051333");
        assert_eq!(form.blur(StudentField::Iban), ValidationResult::Invalid);
        assert!(form.billing.bic.is_empty());
    }

    #[test]
    fn unchecked_fields() {
        let mut form = StudentForm::default();
        assert_eq!(form.blur(StudentField::Email), ValidationResult::Unchecked);
    }
}
