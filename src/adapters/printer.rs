use crate::core::roster::Roster;
use crate::domain::model::{Average, Student, StudentId};
use crate::domain::ports::StudentPrinter;
use crate::utils::error::Result;
use std::io::Write;

/// Renders `NAME ID: C1 G1, C2 G2`, or `NAME ID:` for a student without courses.
pub fn render_line(student: &Student) -> String {
    let courses: Vec<String> = student
        .courses()
        .map(|course| format!("{} {}", course.name(), course.grade()))
        .collect();

    if courses.is_empty() {
        format!("{} {}:", student.name(), student.id())
    } else {
        format!("{} {}: {}", student.name(), student.id(), courses.join(", "))
    }
}

/// Prints one student (or all of them in enrollment order) and, when asked,
/// their averages, all through the same printer.
pub fn print_report<P: StudentPrinter + ?Sized>(
    roster: &Roster,
    student: Option<StudentId>,
    averages: bool,
    printer: &mut P,
) -> Result<()> {
    match student {
        Some(id) => roster.print_student(id, printer)?,
        None => roster.print_all(printer)?,
    }

    if averages {
        match student {
            Some(id) => roster.print_average(id, printer)?,
            None => {
                for s in roster.students() {
                    roster.print_average(s.id(), printer)?;
                }
            }
        }
    }
    Ok(())
}

/// One text line per student.
pub struct LinePrinter<W: Write> {
    writer: W,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StudentPrinter for LinePrinter<W> {
    fn print_student(&mut self, student: &Student) -> Result<()> {
        writeln!(self.writer, "{}", render_line(student))?;
        Ok(())
    }

    fn print_average(&mut self, average: &Average) -> Result<()> {
        writeln!(
            self.writer,
            "{} {}: average {:.2}",
            average.student_name, average.student_id, average.value
        )?;
        Ok(())
    }
}

/// One JSON object per line: `{"name":..,"id":..,"courses":[{"name":..,"grade":..}]}`.
pub struct JsonPrinter<W: Write> {
    writer: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StudentPrinter for JsonPrinter<W> {
    fn print_student(&mut self, student: &Student) -> Result<()> {
        serde_json::to_writer(&mut self.writer, student)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_average(&mut self, average: &Average) -> Result<()> {
        serde_json::to_writer(&mut self.writer, average)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
