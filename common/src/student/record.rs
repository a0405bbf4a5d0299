use crate::error::ValidationError;
use crate::student::StudentId;
use crate::student::validate;

/// One entry of the roster.
///
/// Fields are private so that every value held by a record has gone through
/// the rules in [`validate`]. Mutation happens only through
/// [`StudentRecord::apply`].
///
/// Records read back from disk may carry a GPA of exactly `10.0`, which older
/// files could contain. New values never reach the ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    id: StudentId,
    name: String,
    age: u32,
    course: String,
    gpa: f64,
}

impl StudentRecord {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: u32,
        course: impl Into<String>,
        gpa: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let course = course.into();

        check_name(&name)?;
        check_age(age)?;
        check_course(&course)?;
        check_gpa(gpa)?;

        Ok(Self {
            id,
            name,
            age,
            course,
            gpa,
        })
    }

    /// Builds a record read from storage. Same rules as [`StudentRecord::new`]
    /// except that the GPA ceiling is inclusive.
    pub fn from_stored(
        id: StudentId,
        name: impl Into<String>,
        age: u32,
        course: impl Into<String>,
        gpa: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let course = course.into();

        check_name(&name)?;
        check_age(age)?;
        check_course(&course)?;
        if !validate::validate_stored_gpa(gpa) {
            return Err(ValidationError::StoredGpaOutOfRange(gpa));
        }

        Ok(Self {
            id,
            name,
            age,
            course,
            gpa,
        })
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Applies every field set in `update`.
    ///
    /// The whole update is validated first; on error the record is untouched.
    pub fn apply(&mut self, update: &RecordUpdate) -> Result<(), ValidationError> {
        update.validate()?;

        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(course) = &update.course {
            self.course.clone_from(course);
        }
        if let Some(gpa) = update.gpa {
            self.gpa = gpa;
        }
        Ok(())
    }
}

/// Replacement values for a record. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub course: Option<String>,
    pub gpa: Option<f64>,
}

impl RecordUpdate {
    /// Replaces every mutable field at once.
    pub fn all(name: impl Into<String>, age: u32, course: impl Into<String>, gpa: f64) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            course: Some(course.into()),
            gpa: Some(gpa),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(age) = self.age {
            check_age(age)?;
        }
        if let Some(course) = &self.course {
            check_course(course)?;
        }
        if let Some(gpa) = self.gpa {
            check_gpa(gpa)?;
        }
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if validate::validate_text(name) {
        Ok(())
    } else {
        Err(ValidationError::MultilineText("name"))
    }
}

fn check_course(course: &str) -> Result<(), ValidationError> {
    if validate::validate_text(course) {
        Ok(())
    } else {
        Err(ValidationError::MultilineText("course"))
    }
}

fn check_age(age: u32) -> Result<(), ValidationError> {
    if validate::validate_age(age) {
        Ok(())
    } else {
        Err(ValidationError::AgeOutOfRange(age))
    }
}

fn check_gpa(gpa: f64) -> Result<(), ValidationError> {
    if validate::validate_gpa(gpa) {
        Ok(())
    } else {
        Err(ValidationError::GpaOutOfRange(gpa))
    }
}
