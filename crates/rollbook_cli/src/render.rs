//! Plain-text table rendering for record lists.

use rollbook_core::Record;

const HEADERS: [&str; 5] = ["#", "Name", "Roll", "Grade", "Marks"];

/// Renders `records` as an aligned table followed by a total line.
///
/// Row numbers are 1-based positions within `records`, which may be a
/// filtered view.
pub fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\nTotal Students: 0".to_string();
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            [
                (i + 1).to_string(),
                record.name.clone(),
                record.roll.clone(),
                record.grade.clone(),
                record.marks.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    push_row(&mut out, &widths.map(|width| "-".repeat(width)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!("Total Students: {}", records.len()));
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use rollbook_core::Record;

    #[test]
    fn renders_aligned_rows_and_total() {
        let table = render_table(&[
            Record::new("Asha", "1", "A", 91),
            Record::new("Benedict", "22", "B+", 7),
        ]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "#  Name      Roll  Grade  Marks");
        assert_eq!(lines[2], "1  Asha      1     A      91");
        assert_eq!(lines[3], "2  Benedict  22    B+     7");
        assert_eq!(lines[4], "Total Students: 2");
    }

    #[test]
    fn renders_empty_notice() {
        assert!(render_table(&[]).starts_with("No records found."));
    }
}
