use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{AcademyError, join_errors};
use super::types::*;
use super::validation;

/// Builder for constructing valid students.
///
/// ```
/// use academy::core::*;
/// use chrono::NaiveDate;
///
/// let student = StudentBuilder::new("st-1", "Lucía", "García", "12345678Z",
///         NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
///     .email("lucia@example.com")
///     .bank_account("ES91 2100 0418 4502 0005 1332", Some("CAIXESBBXXX"))
///     .build()
///     .unwrap();
/// assert_eq!(student.full_name(), "Lucía García");
/// ```
pub struct StudentBuilder {
    id: String,
    first_name: String,
    last_name: String,
    document_kind: DocumentKind,
    document_number: String,
    birth_date: Option<NaiveDate>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<Address>,
    bank_account: Option<BankAccount>,
    enrolled_on: NaiveDate,
    active: bool,
}

impl StudentBuilder {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        document_number: impl Into<String>,
        enrolled_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            document_kind: DocumentKind::Person,
            document_number: document_number.into(),
            birth_date: None,
            email: None,
            phone: None,
            address: None,
            bank_account: None,
            enrolled_on,
            active: true,
        }
    }

    pub fn document_kind(mut self, kind: DocumentKind) -> Self {
        self.document_kind = kind;
        self
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn bank_account(mut self, iban: impl Into<String>, bic: Option<&str>) -> Self {
        self.bank_account = Some(BankAccount {
            iban: iban.into(),
            bic: bic.map(Into::into),
            holder: None,
        });
        self
    }

    pub fn account_holder(mut self, holder: impl Into<String>) -> Self {
        if let Some(account) = self.bank_account.as_mut() {
            account.holder = Some(holder.into());
        }
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Build the student, running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Student, AcademyError> {
        let student = self.build_unchecked()?;
        let errors = validation::validate_student(&student);
        if !errors.is_empty() {
            return Err(join_errors(&errors));
        }
        Ok(student)
    }

    /// Build without validation, for importing existing data.
    pub fn build_unchecked(self) -> Result<Student, AcademyError> {
        if self.id.trim().is_empty() {
            return Err(AcademyError::Builder("student id is required".into()));
        }
        Ok(Student {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            document_kind: self.document_kind,
            document_number: self.document_number,
            birth_date: self.birth_date,
            email: self.email,
            phone: self.phone,
            address: self.address,
            bank_account: self.bank_account,
            enrolled_on: self.enrolled_on,
            active: self.active,
        })
    }
}

/// Builder for [`Address`].
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new(city: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            address: Address {
                street: None,
                city: city.into(),
                postal_code: postal_code.into(),
                province: None,
            },
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.street = Some(street.into());
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.address.province = Some(province.into());
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

/// Builder for [`Course`].
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            course: Course {
                id: id.into(),
                name: name.into(),
                level: None,
                instructor_id: None,
                capacity,
                monthly_fee: Decimal::ZERO,
                active: true,
            },
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.course.level = Some(level.into());
        self
    }

    pub fn instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.course.instructor_id = Some(instructor_id.into());
        self
    }

    pub fn monthly_fee(mut self, fee: Decimal) -> Self {
        self.course.monthly_fee = fee;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.course.active = false;
        self
    }

    /// Build the course, running validation.
    pub fn build(self) -> Result<Course, AcademyError> {
        let course = self.build_unchecked()?;
        let errors = validation::validate_course(&course);
        if !errors.is_empty() {
            return Err(join_errors(&errors));
        }
        Ok(course)
    }

    /// Build without validation. Only the course id is required.
    pub fn build_unchecked(self) -> Result<Course, AcademyError> {
        if self.course.id.trim().is_empty() {
            return Err(AcademyError::Builder("course id is required".into()));
        }
        Ok(self.course)
    }
}

/// Builder for [`Receipt`].
///
/// New receipts start out `Pending`; call [`ReceiptBuilder::paid_on`] to
/// record a payment.
pub struct ReceiptBuilder {
    receipt: Receipt,
}

impl ReceiptBuilder {
    pub fn new(
        number: impl Into<String>,
        student_id: impl Into<String>,
        amount: Decimal,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            receipt: Receipt {
                number: number.into(),
                student_id: student_id.into(),
                concept: String::new(),
                amount,
                issue_date,
                due_date: issue_date,
                status: ReceiptStatus::Pending,
                paid_on: None,
            },
        }
    }

    pub fn concept(mut self, concept: impl Into<String>) -> Self {
        self.receipt.concept = concept.into();
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.receipt.due_date = date;
        self
    }

    pub fn paid_on(mut self, date: NaiveDate) -> Self {
        self.receipt.status = ReceiptStatus::Paid;
        self.receipt.paid_on = Some(date);
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.receipt.status = ReceiptStatus::Cancelled;
        self.receipt.paid_on = None;
        self
    }

    /// Build the receipt, running validation.
    pub fn build(self) -> Result<Receipt, AcademyError> {
        let receipt = self.build_unchecked()?;
        let errors = validation::validate_receipt(&receipt);
        if !errors.is_empty() {
            return Err(join_errors(&errors));
        }
        Ok(receipt)
    }

    /// Build without validation. Only the receipt number is required.
    pub fn build_unchecked(self) -> Result<Receipt, AcademyError> {
        if self.receipt.number.trim().is_empty() {
            return Err(AcademyError::Builder("receipt number is required".into()));
        }
        Ok(self.receipt)
    }
}
