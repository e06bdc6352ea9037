// CSV writer for the admin export endpoints. RFC 4180 quoting: a field is
// quoted when it contains a comma, quote, or newline; quotes are doubled.

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds a full document: one header line plus one line per row,
/// each terminated with CRLF.
pub fn write_document(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&write_row(
        &header.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    out.push_str("\r\n");
    for row in rows {
        out.push_str(&write_row(row));
        out.push_str("\r\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_header_plus_one_line_per_row() {
        let rows = vec![
            vec!["Asha Rao".to_string(), "9876500001".to_string()],
            vec!["Vikram S".to_string(), "9876500002".to_string()],
        ];
        let doc = write_document(&["name", "phone"], &rows);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 1 + rows.len());
        assert_eq!(lines[0], "name,phone");
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let row = write_row(&["Rao, Asha".to_string(), "said \"ok\"".to_string()]);
        assert_eq!(row, "\"Rao, Asha\",\"said \"\"ok\"\"\"");
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(write_row(&["a".to_string(), "b".to_string()]), "a,b");
    }
}
