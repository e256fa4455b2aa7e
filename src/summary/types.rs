//! Data types shared by the summary pipeline.

use crate::summary::utility::format_percent;

/// Which average a graded column feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Assessment,
    Lab,
}

/// The classification of one column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Name starts with "student"; never aggregated.
    Student,
    /// A `<type> - <code> ...` header.
    Graded {
        kind: Kind,
        /// First segment of the dotted code, case preserved.
        module: String,
        /// Lower-cased type token as written in the header.
        raw_type: String,
    },
    /// No recognizable pattern; ignored by aggregation.
    Unclassified,
}

impl Classification {
    pub fn module(&self) -> Option<&str> {
        match self {
            Classification::Graded { module, .. } => Some(module),
            _ => None,
        }
    }
}

/// The graded columns of a single module, by index into the raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleColumns {
    pub module: String,
    pub assessment: Vec<usize>,
    pub lab: Vec<usize>,
}

/// Modules in the order their first graded column appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    pub modules: Vec<ModuleColumns>,
}

impl ModuleRegistry {
    /// Adds `column` under `module`, creating the module entry on first sight.
    pub fn push(&mut self, module: &str, kind: Kind, column: usize) {
        let pos = match self.modules.iter().position(|m| m.module == module) {
            Some(pos) => pos,
            None => {
                self.modules.push(ModuleColumns {
                    module: module.to_string(),
                    assessment: Vec::new(),
                    lab: Vec::new(),
                });
                self.modules.len() - 1
            }
        };

        let entry = &mut self.modules[pos];
        match kind {
            Kind::Assessment => entry.assessment.push(column),
            Kind::Lab => entry.lab.push(column),
        }
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.module.as_str())
    }
}

/// Averages for one module; `None` when no value was present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModuleAverages {
    pub assessment: Option<f64>,
    pub lab: Option<f64>,
}

/// One output row: the student identity plus averages in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub student: String,
    pub modules: Vec<ModuleAverages>,
}

impl StudentSummary {
    /// Formatted cells in final column order: student, every assessment
    /// average, then every lab average.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(1 + self.modules.len() * 2);
        cells.push(self.student.clone());
        cells.extend(self.modules.iter().map(|m| format_percent(m.assessment)));
        cells.extend(self.modules.iter().map(|m| format_percent(m.lab)));
        cells
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub modules: Vec<String>,
    pub rows: Vec<StudentSummary>,
}

impl Summary {
    /// Header title for the student identity column.
    pub const STUDENT_COLUMN: &'static str = "Student";

    /// Column headers in final order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(1 + self.modules.len() * 2);
        columns.push(Self::STUDENT_COLUMN.to_string());
        columns.extend(
            self.modules
                .iter()
                .map(|m| format!("Module {m} Assignments")),
        );
        columns.extend(self.modules.iter().map(|m| format!("Module {m} Labs")));
        columns
    }

    /// Every row's formatted cells, in input row order.
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(StudentSummary::cells).collect()
    }
}
