use crate::core::container::OrderedContainer;
use crate::domain::model::{Average, Course, Student, StudentId};
use crate::domain::ports::{Element, StudentPrinter};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{try_copy_str, validate_non_empty_string};

/// Students in enrollment order, each owning its courses.
///
/// Lookups by id or course name are linear scans over the owning container.
#[derive(Debug, Default)]
pub struct Roster {
    students: OrderedContainer<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            students: OrderedContainer::new(),
        }
    }

    pub fn with_capacity(students: usize) -> Result<Self> {
        Ok(Self {
            students: OrderedContainer::with_capacity(students)?,
        })
    }

    /// Releases every student and, through them, every course.
    pub fn destroy(self) {
        tracing::debug!("Destroying roster with {} students", self.students.len());
        drop(self);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.find(|student| student.id() == id)
    }

    /// Students in enrollment order.
    pub fn students(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn add_student(&mut self, name: &str, id: StudentId) -> Result<()> {
        validate_non_empty_string("student_name", name)?;

        if self.student(id).is_some() {
            tracing::warn!("Rejected student '{}': id {} already enrolled", name, id);
            return Err(RosterError::duplicate_key(format!("student id {}", id)));
        }

        // The container keeps its own copy; `student` is dropped on return.
        let student = Student::new(name, id)?;
        self.students.append(&student)?;

        tracing::debug!("Enrolled student '{}' ({})", name, id);
        Ok(())
    }

    pub fn add_grade(&mut self, course_name: &str, student_id: StudentId, grade: i32) -> Result<()> {
        let course = Course::new(course_name, grade)?;

        let student = self
            .students
            .find_mut(|student| student.id() == student_id)
            .ok_or(RosterError::NotFound { id: student_id })?;

        if let Err(e) = student.add_course(&course) {
            tracing::warn!("Rejected grade for student {}: {}", student_id, e);
            return Err(e);
        }

        tracing::debug!(
            "Recorded {} = {} for student {}",
            course_name,
            grade,
            student_id
        );
        Ok(())
    }

    pub fn calc_avg(&self, student_id: StudentId) -> Result<Average> {
        let student = self
            .student(student_id)
            .ok_or(RosterError::NotFound { id: student_id })?;

        Ok(Average {
            student_name: try_copy_str(student.name())?,
            student_id,
            value: student.average(),
        })
    }

    /// Hands the average of one student to the printer.
    pub fn print_average<P: StudentPrinter + ?Sized>(
        &self,
        student_id: StudentId,
        printer: &mut P,
    ) -> Result<()> {
        let average = self.calc_avg(student_id)?;
        printer.print_average(&average)
    }

    pub fn print_student<P: StudentPrinter + ?Sized>(
        &self,
        student_id: StudentId,
        printer: &mut P,
    ) -> Result<()> {
        let student = self
            .student(student_id)
            .ok_or(RosterError::NotFound { id: student_id })?;
        printer.print_student(student)
    }

    pub fn print_all<P: StudentPrinter + ?Sized>(&self, printer: &mut P) -> Result<()> {
        for student in &self.students {
            printer.print_student(student)?;
        }
        Ok(())
    }
}

impl Element for Roster {
    fn duplicate(&self) -> Result<Self> {
        Ok(Self {
            students: self.students.duplicate()?,
        })
    }
}
