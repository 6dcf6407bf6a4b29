use serde_json::{Map, Value};
use std::io::{self, Write};

/// Write output as CSV to stdout.
///
/// A bare list of rows (the `schedule` command) is written one row per
/// record. An object result starts with a `field,value` block of its scalar
/// figures, followed by one section per nested list or object: a single-cell
/// title row naming the section, then its rows. Record widths differ between
/// sections.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let _ = write_result(&mut wtr, result);
    let _ = wtr.flush();
}

fn write_result<W: Write>(wtr: &mut csv::Writer<W>, result: &Value) -> csv::Result<()> {
    match result {
        Value::Array(rows) => write_rows(wtr, rows),
        Value::Object(map) => {
            write_fields(wtr, map)?;
            for (key, val) in map {
                match val {
                    Value::Array(rows) => {
                        wtr.write_record([key.as_str()])?;
                        write_rows(wtr, rows)?;
                    }
                    Value::Object(section) => {
                        wtr.write_record([key.as_str()])?;
                        write_section(wtr, section)?;
                    }
                    _ => {}
                }
            }
            Ok(())
        }
        other => wtr.write_record([&format_csv_value(other)]),
    }
}

fn write_fields<W: Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        if !val.is_array() && !val.is_object() {
            wtr.write_record([key.as_str(), &format_csv_value(val)])?;
        }
    }
    Ok(())
}

/// An object of records (the breakdown slices) becomes a keyed table;
/// an object of scalars becomes another field/value block.
fn write_section<W: Write>(
    wtr: &mut csv::Writer<W>,
    section: &Map<String, Value>,
) -> csv::Result<()> {
    if !section.values().all(Value::is_object) {
        return write_fields(wtr, section);
    }

    let Some(Value::Object(first)) = section.values().next() else {
        return Ok(());
    };
    let mut headers = vec!["name"];
    headers.extend(first.keys().map(|k| k.as_str()));
    wtr.write_record(&headers)?;

    for (name, item) in section {
        if let Value::Object(map) = item {
            let mut row = vec![name.clone()];
            row.extend(
                headers[1..]
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default()),
            );
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([&format_csv_value(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
