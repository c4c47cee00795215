use crate::core::roster::Roster;
use crate::domain::model::{Grade, StudentId};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: Option<RosterInfo>,
    #[serde(default)]
    pub students: Vec<StudentSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSeed {
    pub name: String,
    pub id: StudentId,
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSeed {
    pub name: String,
    pub grade: i32,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RosterError::ConfigError {
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TERM_NAME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn roster_name(&self) -> &str {
        self.roster.as_ref().map(|r| r.name.as_str()).unwrap_or("roster")
    }

    pub fn course_count(&self) -> usize {
        self.students.iter().map(|s| s.courses.len()).sum()
    }

    /// Replays the seed through the roster API, so enrollment rules apply
    /// exactly as they would for a host program.
    pub fn build_roster(&self) -> Result<Roster> {
        let mut roster = Roster::with_capacity(self.students.len())?;
        for student in &self.students {
            roster.add_student(&student.name, student.id)?;
            for course in &student.courses {
                roster.add_grade(&course.name, student.id, course.grade)?;
            }
        }
        tracing::info!(
            "Loaded '{}': {} students, {} grades",
            self.roster_name(),
            roster.len(),
            self.course_count()
        );
        Ok(roster)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for (i, student) in self.students.iter().enumerate() {
            validate_non_empty_string(&format!("students[{}].name", i), &student.name)?;
            if !ids.insert(student.id) {
                return Err(RosterError::ConfigValidationError {
                    field: format!("students[{}].id", i),
                    message: format!("Student id {} appears more than once", student.id),
                });
            }

            let mut course_names = HashSet::new();
            for (j, course) in student.courses.iter().enumerate() {
                let field = format!("students[{}].courses[{}]", i, j);
                validate_non_empty_string(&format!("{}.name", field), &course.name)?;
                validate_range(&format!("{}.grade", field), course.grade, Grade::MIN, Grade::MAX)?;
                if !course_names.insert(course.name.as_str()) {
                    return Err(RosterError::ConfigValidationError {
                        field,
                        message: format!("Course '{}' repeated for student {}", course.name, student.id),
                    });
                }
            }
        }
        Ok(())
    }
}
