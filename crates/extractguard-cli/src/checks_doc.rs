/// Print the documentation of every check and of the extract keys
pub fn print_checks_documentation() {
    println!("{}", checks_documentation());
}

fn checks_documentation() -> String {
    format!(
        r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                        EXTRACTGUARD CHECKS                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
{}
{}
{}
"#,
        reading_section(),
        checks_section(),
        config_section()
    )
}

fn reading_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 READING EXTRACTS
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
  • Fields are separated by '|' unless 'delimiter' says otherwise
  • The first line is the header unless 'header = false' or 'columns' is set
  • Every check reads the file again, so checks never share state
  • Empty fields and the pandas null markers (NULL, null, NA, N/A, n/a,
    NaN, nan, None, <NA>, #N/A, ...) plus \N are read as null
  • Column names are compared exactly as written, spaces included
  • A file that cannot be read fails every check run against it:
      StructureCheck  "Error reading <path>: <error>"
      NullCheck       "Error checking nulls: <error>"
      TypeCheck       "Error checking data types: <error>"
      RowCountCheck   "Error checking row count: <error>"
"#
    .to_string()
}

fn checks_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 CHECKS
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
┌─────────────────────────────────────────────────────────────────────────────┐
│ StructureCheck                                         (always runs)        │
├─────────────────────────────────────────────────────────────────────────────┤
│ Fails on an extract without data rows.                                      │
│ With 'expected_columns', fails unless the header matches exactly,           │
│ order included.                                                             │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ NullCheck                                  (runs with 'critical_columns')   │
├─────────────────────────────────────────────────────────────────────────────┤
│ Fails on the first critical column holding a null.                          │
│ A critical column missing from the file is a warning, not a failure.        │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ TypeCheck                                             (runs with 'types')   │
├─────────────────────────────────────────────────────────────────────────────┤
│ Fails on the first column with a value that does not parse as its type.     │
│ Types: integer (int, i64), float (double, f64), timestamp (datetime, date). │
│ Null values are never conversion errors.                                    │
│ Whitespace around a value is ignored for every type.                        │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ RowCountCheck                                          (always runs)        │
├─────────────────────────────────────────────────────────────────────────────┤
│ Fails when the row count is below 'min_rows' (default 1) or above           │
│ 'max_rows' (no upper bound by default). Both bounds are inclusive.          │
└─────────────────────────────────────────────────────────────────────────────┘
"#
    .to_string()
}

fn config_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 CONFIGURATION
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
  [[extract]]
  name = "orders"
  path = "order_extract.csv"
  expected_columns = ["order_id", "customer_id", "amount"]
  critical_columns = ["order_id", "customer_id"]
  types = [
      { column = "order_id", type = "integer" },
      { column = "amount", type = "float" },
  ]
  min_rows = 1
  max_rows = 100000

  [[extract]]
  name = "iss"
  path = "export_file.csv"
  columns = ["lat", "lon", "iss_lat", "iss_lon", "timestamp"]

  Exit status: 0 when every check passed, 1 when any check failed,
               2 when the configuration could not be used.

  For more information:
    extractguard --help
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
"#
    .to_string()
}
