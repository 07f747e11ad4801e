use rust_decimal::Decimal;

use super::document::is_valid_document_number;
use super::error::ValidationError;
use super::iban::{is_valid_bic, is_valid_iban};
use super::types::*;

/// Outcome of an on-demand field check.
///
/// Produced fresh by every check and held by the caller (typically form
/// state). `Unchecked` means the field has not been checked since it was
/// last edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

impl ValidationResult {
    pub fn from_bool(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    pub fn is_valid(&self) -> bool {
        *self == Self::Valid
    }
}

/// Validate a student record.
/// Returns all validation errors found (not just the first).
pub fn validate_student(student: &Student) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if student.first_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "first_name",
            "first name must not be empty",
        ));
    }
    if student.last_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "last_name",
            "last name must not be empty",
        ));
    }

    validate_document(&student.document_number, "document_number", &mut errors);

    if let Some(email) = &student.email {
        validate_email(email, "email", &mut errors);
    }

    if let Some(address) = &student.address {
        validate_address(address, "address", &mut errors);
    }

    if let Some(account) = &student.bank_account {
        validate_bank_account(account, "bank_account", &mut errors);
    }

    if let Some(birth_date) = student.birth_date {
        if birth_date > student.enrolled_on {
            errors.push(ValidationError::new(
                "birth_date",
                "birth date must not be after the enrollment date",
            ));
        }
    }

    errors
}

/// Validate an instructor record.
pub fn validate_instructor(instructor: &Instructor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if instructor.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name must not be empty"));
    }
    validate_document(&instructor.document_number, "document_number", &mut errors);
    if let Some(email) = &instructor.email {
        validate_email(email, "email", &mut errors);
    }

    errors
}

/// Validate a course record.
pub fn validate_course(course: &Course) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if course.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "course name must not be empty"));
    }
    if course.capacity == 0 {
        errors.push(ValidationError::new(
            "capacity",
            "capacity must be at least 1",
        ));
    }
    if course.monthly_fee < Decimal::ZERO {
        errors.push(ValidationError::new(
            "monthly_fee",
            format!("monthly fee must not be negative, got {}", course.monthly_fee),
        ));
    }

    errors
}

/// Validate an enrollment record.
pub fn validate_enrollment(enrollment: &Enrollment) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if enrollment.student_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "student_id",
            "student reference must not be empty",
        ));
    }
    if enrollment.course_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "course_id",
            "course reference must not be empty",
        ));
    }
    if let Some(end) = enrollment.end_date {
        if end < enrollment.start_date {
            errors.push(ValidationError::new(
                "end_date",
                format!(
                    "end date {end} is before start date {}",
                    enrollment.start_date
                ),
            ));
        }
    }

    errors
}

/// Validate a receipt.
pub fn validate_receipt(receipt: &Receipt) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if receipt.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "receipt number must not be empty",
        ));
    }
    if receipt.concept.trim().is_empty() {
        errors.push(ValidationError::new("concept", "concept must not be empty"));
    }
    if receipt.amount <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "amount",
            format!("amount must be positive, got {}", receipt.amount),
        ));
    }
    if receipt.due_date < receipt.issue_date {
        errors.push(ValidationError::new(
            "due_date",
            format!(
                "due date {} is before issue date {}",
                receipt.due_date, receipt.issue_date
            ),
        ));
    }

    match (receipt.status, receipt.paid_on) {
        (ReceiptStatus::Paid, None) => errors.push(ValidationError::new(
            "paid_on",
            "paid receipts must record the payment date",
        )),
        (ReceiptStatus::Paid, Some(paid_on)) if paid_on < receipt.issue_date => {
            errors.push(ValidationError::new(
                "paid_on",
                format!(
                    "payment date {paid_on} is before issue date {}",
                    receipt.issue_date
                ),
            ))
        }
        (ReceiptStatus::Pending | ReceiptStatus::Cancelled, Some(_)) => {
            errors.push(ValidationError::new(
                "paid_on",
                "only paid receipts may carry a payment date",
            ))
        }
        _ => {}
    }

    errors
}

fn validate_document(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(
            field,
            "document number must not be empty",
        ));
    } else if !is_valid_document_number(value) {
        errors.push(ValidationError::new(
            field,
            format!("'{value}' is not a valid document number"),
        ));
    }
}

fn validate_email(email: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    };
    if !valid {
        errors.push(ValidationError::new(
            field,
            format!("'{email}' is not a valid email address"),
        ));
    }
}

fn validate_address(address: &Address, prefix: &str, errors: &mut Vec<ValidationError>) {
    if address.city.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.city"),
            "city must not be empty",
        ));
    }

    let postal = address.postal_code.trim();
    if postal.len() != 5 || !postal.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new(
            format!("{prefix}.postal_code"),
            format!("postal code must be 5 digits, got '{}'", address.postal_code),
        ));
    }
}

fn validate_bank_account(account: &BankAccount, prefix: &str, errors: &mut Vec<ValidationError>) {
    if !is_valid_iban(&account.iban) {
        errors.push(ValidationError::new(
            format!("{prefix}.iban"),
            format!("'{}' is not a valid IBAN", account.iban),
        ));
    }
    if let Some(bic) = &account.bic {
        if !is_valid_bic(bic) {
            errors.push(ValidationError::new(
                format!("{prefix}.bic"),
                format!("'{bic}' is not a valid BIC"),
            ));
        }
    }
}
