use crate::domain::model::{Average, Student};
use crate::utils::error::Result;

/// Value type that can live in an [`OrderedContainer`](crate::core::container::OrderedContainer).
///
/// `duplicate` produces an independent deep copy and is the only way elements
/// enter a container. Destruction is the type's `Drop`, run exactly once per
/// copy when the owning container goes away.
pub trait Element: Sized {
    fn duplicate(&self) -> Result<Self>;
}

/// Receives students to render. Implementations see the name, the id and the
/// courses in insertion order; the borrow ends when the call returns.
pub trait StudentPrinter {
    fn print_student(&mut self, student: &Student) -> Result<()>;

    /// Renders a computed average in the same output format as the students.
    fn print_average(&mut self, average: &Average) -> Result<()>;
}
