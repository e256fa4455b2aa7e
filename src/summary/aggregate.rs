use crate::parser::RawTable;
use crate::summary::normalize::normalize_cell;
use crate::summary::types::{
    Classification, ModuleAverages, ModuleRegistry, StudentSummary,
};
use crate::summary::utility::mean;

/// Builds the module registry from per-column classifications in one pass.
///
/// `identity` is the student identity column; it is never aggregated, even
/// when it was only chosen as the first-column fallback.
pub fn build_registry(classifications: &[Classification], identity: usize) -> ModuleRegistry {
    let mut registry = ModuleRegistry::default();

    for (idx, classification) in classifications.iter().enumerate() {
        if idx == identity {
            continue;
        }
        if let Classification::Graded { kind, module, .. } = classification {
            registry.push(module, *kind, idx);
        }
    }

    registry
}

/// Computes every student's per-module averages, preserving row order.
pub fn aggregate_rows(
    table: &RawTable,
    registry: &ModuleRegistry,
    identity: usize,
) -> Vec<StudentSummary> {
    (0..table.rows.len())
        .map(|row| StudentSummary {
            student: table.cell(row, identity).unwrap_or_default().to_string(),
            modules: registry
                .modules
                .iter()
                .map(|m| ModuleAverages {
                    assessment: column_mean(table, row, &m.assessment),
                    lab: column_mean(table, row, &m.lab),
                })
                .collect(),
        })
        .collect()
}

/// Mean of the present values in `columns` for one row.
fn column_mean(table: &RawTable, row: usize, columns: &[usize]) -> Option<f64> {
    let values: Vec<f64> = columns
        .iter()
        .filter_map(|&col| normalize_cell(table.cell(row, col)))
        .collect();
    mean(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::classify::classify_header;

    fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    fn classify(table: &RawTable) -> Vec<Classification> {
        table.columns.iter().map(|c| classify_header(c)).collect()
    }

    #[test]
    fn test_registry_skips_student_and_unclassified() {
        let t = table(
            &[
                "Student",
                "Email",
                "Lab - 2.1 A",
                "Assessment - 1.1 B",
                "Assessment - 2.2 C",
            ],
            &[],
        );
        let registry = build_registry(&classify(&t), 0);

        let names: Vec<_> = registry.module_names().collect();
        assert_eq!(names, vec!["2", "1"]);
        assert_eq!(registry.modules[0].lab, vec![2]);
        assert_eq!(registry.modules[0].assessment, vec![4]);
        assert_eq!(registry.modules[1].assessment, vec![3]);
    }

    #[test]
    fn test_identity_fallback_column_is_not_aggregated() {
        let t = table(&["Assessment - 1.1 A", "Assessment - 1.2 B"], &[]);
        let registry = build_registry(&classify(&t), 0);
        assert_eq!(registry.modules[0].assessment, vec![1]);
    }

    #[test]
    fn test_mean_ignores_missing_values() {
        let t = table(
            &["Student", "Assessment - 1.1 A", "Assessment - 1.2 B", "Assessment - 1.3 C"],
            &[&["Alice", "80%", "", "n/a"], &["Bob", "70", "90", "abc"]],
        );
        let registry = build_registry(&classify(&t), 0);
        let rows = aggregate_rows(&t, &registry, 0);

        assert_eq!(rows[0].modules[0].assessment, Some(80.0));
        assert_eq!(rows[1].modules[0].assessment, Some(80.0));
    }

    #[test]
    fn test_all_missing_is_undefined_not_zero() {
        let t = table(
            &["Student", "Assessment - 1.1 A", "Lab - 2.1 B"],
            &[&["Alice", "", "95"]],
        );
        let registry = build_registry(&classify(&t), 0);
        let rows = aggregate_rows(&t, &registry, 0);

        assert_eq!(rows[0].modules[0], ModuleAverages { assessment: None, lab: None });
        assert_eq!(
            rows[0].modules[1],
            ModuleAverages { assessment: None, lab: Some(95.0) }
        );
        assert_eq!(rows[0].cells(), vec!["Alice", "", "", "", "95.00%"]);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let t = table(
            &["Student", "Lab - 1.1 A"],
            &[&["Zed", "1"], &["Amy", "2"], &["Mia", "3"]],
        );
        let registry = build_registry(&classify(&t), 0);
        let students: Vec<_> = aggregate_rows(&t, &registry, 0)
            .into_iter()
            .map(|r| r.student)
            .collect();
        assert_eq!(students, vec!["Zed", "Amy", "Mia"]);
    }
}
