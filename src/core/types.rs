use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A student enrolled (or formerly enrolled) at the academy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Record identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name(s).
    pub last_name: String,
    /// Which kind of identity document `document_number` holds.
    pub document_kind: DocumentKind,
    /// NIF-style document number (8 digits + control letter).
    pub document_number: String,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<Address>,
    /// Account used for direct-debit billing.
    pub bank_account: Option<BankAccount>,
    /// Date the student joined the academy.
    pub enrolled_on: NaiveDate,
    /// Inactive students are kept for history but excluded from dashboards.
    pub active: bool,
}

impl Student {
    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Kind of identity document.
///
/// All kinds are checked with the same letter checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentKind {
    /// National identity document of a person.
    #[default]
    Person,
    /// Foreign resident identity number.
    ForeignResident,
    /// Legal entity tax identifier.
    LegalEntity,
}

/// Postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Street + house number.
    pub street: Option<String>,
    /// City.
    pub city: String,
    /// Postal code (5 digits).
    pub postal_code: String,
    /// Province.
    pub province: Option<String>,
}

/// Bank account for direct debits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    /// IBAN as entered (may contain spaces).
    pub iban: String,
    /// Bank identifier code.
    pub bic: Option<String>,
    /// Account holder, if different from the student.
    pub holder: Option<String>,
}

/// Teaching staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Record identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// NIF-style document number.
    pub document_number: String,
    /// Contact email.
    pub email: Option<String>,
}

/// A course (group) students enroll in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Record identifier.
    pub id: String,
    /// Course name.
    pub name: String,
    /// Level label (e.g. "B1").
    pub level: Option<String>,
    /// Assigned instructor.
    pub instructor_id: Option<String>,
    /// Number of seats.
    pub capacity: u32,
    /// Monthly fee charged per student.
    pub monthly_fee: Decimal,
    /// Whether the course currently runs.
    pub active: bool,
}

/// Student ↔ course membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled student.
    pub student_id: String,
    /// Course enrolled in.
    pub course_id: String,
    /// First day of the enrollment.
    pub start_date: NaiveDate,
    /// Last day, if the enrollment has ended.
    pub end_date: Option<NaiveDate>,
    /// Current status.
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// Whether the enrollment currently occupies a seat.
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

/// Enrollment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    /// Attending.
    Active,
    /// Left before the end of the course.
    Withdrawn,
    /// Finished the course.
    Completed,
}

/// A single scheduled class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    /// Record identifier.
    pub id: String,
    /// Course the class belongs to.
    pub course_id: String,
    /// Instructor teaching this class.
    pub instructor_id: Option<String>,
    /// Day of the class.
    pub date: NaiveDate,
    /// Start time.
    pub start: NaiveTime,
    /// End time.
    pub end: NaiveTime,
    /// Room label.
    pub room: Option<String>,
}

impl ClassSession {
    /// Length of the class in hours, rounded to 2 decimal places.
    ///
    /// Zero when `end` is not after `start`.
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        if minutes <= 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
    }
}

/// Attendance of one student at one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Student the record is about.
    pub student_id: String,
    /// Course the class belongs to.
    pub course_id: String,
    /// Day of the class.
    pub date: NaiveDate,
    /// What happened.
    pub status: AttendanceStatus,
}

/// Attendance outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Attended on time.
    Present,
    /// Attended, arrived late.
    Late,
    /// Did not attend.
    Absent,
    /// Did not attend, with a justification.
    Justified,
}

impl AttendanceStatus {
    /// Whether the student was in class.
    pub fn attended(&self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

/// A billing receipt issued to a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt number (see `ReceiptNumberSequence`).
    pub number: String,
    /// Billed student.
    pub student_id: String,
    /// What is being charged (e.g. "October fee").
    pub concept: String,
    /// Amount charged.
    pub amount: Decimal,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Payment status.
    pub status: ReceiptStatus,
    /// Date the receipt was paid; set iff `status` is `Paid`.
    pub paid_on: Option<NaiveDate>,
}

/// Receipt payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiptStatus {
    /// Awaiting payment.
    Pending,
    /// Paid in full.
    Paid,
    /// Voided; excluded from totals.
    Cancelled,
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls within the range (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The normalized record set dashboards are computed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcademyRecords {
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub sessions: Vec<ClassSession>,
    pub attendance: Vec<AttendanceRecord>,
    pub receipts: Vec<Receipt>,
}
