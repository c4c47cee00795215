use crate::core::container::OrderedContainer;
use crate::domain::ports::Element;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{try_copy_str, validate_non_empty_string, validate_range};
use serde::Serialize;
use std::fmt;

pub type StudentId = i32;

/// Percentage grade, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(u8);

impl Grade {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(value: i32) -> Result<Self> {
        validate_range("grade", value, Self::MIN, Self::MAX)?;
        u8::try_from(value)
            .map(Grade)
            .map_err(|_| RosterError::invalid_argument("grade", "Value does not fit a percentage"))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Grade {
    type Error = RosterError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Course {
    name: String,
    grade: Grade,
}

impl Course {
    pub fn new(name: &str, grade: i32) -> Result<Self> {
        validate_non_empty_string("course_name", name)?;
        let grade = Grade::new(grade)?;
        Ok(Self {
            name: try_copy_str(name)?,
            grade,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

impl Element for Course {
    fn duplicate(&self) -> Result<Self> {
        Ok(Self {
            name: try_copy_str(&self.name)?,
            grade: self.grade,
        })
    }
}

/// Mean grade of one student with an owned copy of its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Average {
    #[serde(rename = "name")]
    pub student_name: String,
    #[serde(rename = "id")]
    pub student_id: StudentId,
    #[serde(rename = "average")]
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct Student {
    name: String,
    id: StudentId,
    courses: OrderedContainer<Course>,
}

impl Student {
    pub fn new(name: &str, id: StudentId) -> Result<Self> {
        validate_non_empty_string("student_name", name)?;
        Ok(Self {
            name: try_copy_str(name)?,
            id,
            courses: OrderedContainer::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Courses in the order they were recorded.
    pub fn courses(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.find(|course| course.name == name)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Records a copy of `course`. Course names are unique per student.
    pub fn add_course(&mut self, course: &Course) -> Result<()> {
        if self.course(course.name()).is_some() {
            return Err(RosterError::duplicate_key(format!(
                "course '{}' for student {}",
                course.name(),
                self.id
            )));
        }
        self.courses.append(course)
    }

    /// Arithmetic mean of all grades; 0.0 when nothing has been recorded.
    pub fn average(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }
        let total: u64 = self.courses.iter().map(|c| u64::from(c.grade.value())).sum();
        total as f64 / self.courses.len() as f64
    }
}

impl Element for Student {
    fn duplicate(&self) -> Result<Self> {
        // `courses` is copied last; if it fails the name copy is dropped with the error.
        Ok(Self {
            name: try_copy_str(&self.name)?,
            id: self.id,
            courses: self.courses.duplicate()?,
        })
    }
}
