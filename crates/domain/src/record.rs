use std::collections::HashSet;

use log::debug;

use crate::{ExerciseID, ExerciseRecord, RowError, csv::Row};

/// Fields: id, name, type, body part, equipment, gender, target, synergist, two reserved
/// columns and category.
pub const MIN_FIELDS: usize = 11;

const CATEGORY: usize = 10;

/// Maps tokenized rows to records.
///
/// The first row is the header and is always discarded. Rows that are too short, have a
/// non-numeric id or repeat an already seen id are skipped.
pub fn map_rows(rows: impl IntoIterator<Item = Row>) -> Mapping {
    let mut seen = HashSet::new();
    let mut mapping = Mapping::default();

    for (idx, row) in rows.into_iter().enumerate().skip(1) {
        match map_row(&row, &mut seen) {
            Ok(record) => mapping.records.push(record),
            Err(err) => {
                debug!("skipping row {idx}: {err}");
                mapping.skipped.push((idx, err));
            }
        }
    }

    mapping
}

#[derive(Debug, Default, PartialEq)]
pub struct Mapping {
    pub records: Vec<ExerciseRecord>,
    /// Row index (header is 0) and reason of every skipped row.
    pub skipped: Vec<(usize, RowError)>,
}

fn map_row(row: &Row, seen: &mut HashSet<ExerciseID>) -> Result<ExerciseRecord, RowError> {
    if row.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields(row.len()));
    }

    let id = field(row, 0);
    let id = ExerciseID::from(
        id.parse::<i64>()
            .map_err(|_| RowError::InvalidId(id.to_string()))?,
    );

    if !seen.insert(id) {
        return Err(RowError::DuplicateId(id));
    }

    let category = field(row, CATEGORY);

    Ok(ExerciseRecord {
        id,
        name: field(row, 1).to_string(),
        exercise_type: field(row, 2).to_string(),
        body_part: field(row, 3).to_string(),
        equipment: field(row, 4).to_string(),
        gender: field(row, 5).to_string(),
        target: field(row, 6).to_string(),
        synergist: field(row, 7).to_string(),
        category: (!category.is_empty()).then(|| category.to_string()),
    })
}

fn field(row: &Row, idx: usize) -> &str {
    row[idx].trim()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::csv::tokenize;

    const HEADER: &str =
        "id,name,type,bodyPart,equipment,gender,target,synergist,reserved1,reserved2,category\n";

    fn records(text: &str) -> Vec<ExerciseRecord> {
        map_rows(tokenize(text)).records
    }

    #[test]
    fn test_map_rows_header_only() {
        assert_eq!(map_rows(tokenize(HEADER)), Mapping::default());
        assert_eq!(map_rows(tokenize("")), Mapping::default());
    }

    #[test]
    fn test_map_rows_quoted_name() {
        let records = records(&format!(
            "{HEADER}3,\"Bench \"\"Press\"\" Variant\",Strength,Chest,Barbell,Male,Pectoralis,Triceps,,,"
        ));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bench \"Press\" Variant");
    }

    #[test]
    fn test_map_rows_all_fields() {
        assert_eq!(
            records(&format!(
                "{HEADER} 1 , Squat ,Strength,Legs,Barbell,Both,Quadriceps,\"Glutes\n\",x,y,\" Compound \"\r\n"
            )),
            vec![ExerciseRecord {
                id: 1.into(),
                name: String::from("Squat"),
                exercise_type: String::from("Strength"),
                body_part: String::from("Legs"),
                equipment: String::from("Barbell"),
                gender: String::from("Both"),
                target: String::from("Quadriceps"),
                synergist: String::from("Glutes"),
                category: Some(String::from("Compound")),
            }]
        );
    }

    #[rstest]
    #[case::empty("", None)]
    #[case::whitespace("  ", None)]
    #[case::quoted_whitespace("\" \n \"", None)]
    #[case::value("Compound", Some("Compound"))]
    #[case::padded(" Isolation ", Some("Isolation"))]
    fn test_map_rows_category(#[case] category: &str, #[case] expected: Option<&str>) {
        let records = records(&format!("{HEADER}1,a,b,c,d,e,f,g,,,{category}\n"));
        assert_eq!(records[0].category.as_deref(), expected);
    }

    #[test]
    fn test_map_rows_empty_required_fields() {
        let records = records(&format!("{HEADER}1,,,,,,,,,,\n"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].synergist, "");
        assert_eq!(records[0].category, None);
    }

    #[test]
    fn test_map_rows_duplicate_id() {
        let mapping = map_rows(tokenize(&format!(
            "{HEADER}7,First,a,b,c,d,e,f,,,\n8,Other,a,b,c,d,e,f,,,\n7,Second,a,b,c,d,e,f,,,\n"
        )));
        assert_eq!(
            mapping
                .records
                .iter()
                .map(|r| (*r.id, r.name.as_str()))
                .collect::<Vec<_>>(),
            vec![(7, "First"), (8, "Other")]
        );
        assert_eq!(mapping.skipped, vec![(3, RowError::DuplicateId(7.into()))]);
    }

    #[test]
    fn test_map_rows_skipped_rows() {
        let mapping = map_rows(tokenize(&format!(
            "{HEADER}1,a,b,c,d,e,f,g,,,\n2,too,short\n\nx,a,b,c,d,e,f,g,,,\n3,a,b,c,d,e,f,g,,,\n"
        )));
        assert_eq!(
            mapping.records.iter().map(|r| *r.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(
            mapping.skipped,
            vec![
                (2, RowError::TooFewFields(3)),
                (3, RowError::TooFewFields(1)),
                (4, RowError::InvalidId(String::from("x"))),
            ]
        );
    }

    #[test]
    fn test_map_rows_deterministic() {
        let text = format!(
            "{HEADER}2,b,b,b,b,b,b,b,,,\n1,a,a,a,a,a,a,a,,,Compound\n2,c,c,c,c,c,c,c,,,\n"
        );
        assert_eq!(records(&text), records(&text));
        assert_eq!(
            records(&text).iter().map(|r| *r.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }
}
