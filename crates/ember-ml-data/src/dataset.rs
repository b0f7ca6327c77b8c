use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ember_ml_core::{MlError, MlResult};

use crate::selection::Selection;

/// Sentinel rendered by [`ColumnStore::cell_text`] for missing or
/// out-of-range cells.
pub const MISSING_CELL: &str = "x";

/// A named, ordered sequence of optionally-missing numeric values,
/// one per row. `None` marks a cell that was empty or failed numeric parse.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub(crate) values: Vec<Option<f64>>,
}

impl Column {
    fn new(header: &str) -> Self {
        Column {
            header: header.to_string(),
            values: Vec::new(),
        }
    }

    /// Value at `row`, or `None` if missing or out of range.
    pub fn get(&self, row: usize) -> Option<f64> {
        self.values.get(row).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Column-oriented in-memory dataset parsed from comma-delimited text.
///
/// All columns hold the same number of rows once a load succeeds. The
/// store is mutated only during [`load`](ColumnStore::load) and is
/// read-only for models afterwards. A failed load leaves the store
/// unloaded; callers should discard it rather than retry in place.
#[derive(Debug, Default)]
pub struct ColumnStore {
    pub(crate) columns: Vec<Column>,
    pub(crate) selection: Selection,
    loaded: bool,
}

impl ColumnStore {
    /// Empty, unloaded store.
    pub fn new() -> Self {
        ColumnStore::default()
    }

    /// Loads a `.csv` file. Any other extension is rejected before the
    /// filesystem is touched.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MlResult<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            return Err(MlError::UnsupportedFormat(path.display().to_string()));
        }
        Self::from_reader(File::open(path)?)
    }

    /// Loads delimited text from any reader.
    pub fn from_reader<R: Read>(reader: R) -> MlResult<Self> {
        let mut store = ColumnStore::new();
        store.load(reader)?;
        Ok(store)
    }

    /// Parses the first line as the header, every following line as a data
    /// row. Unparseable or empty fields become missing cells, and a blank
    /// line is a full row of missing cells; a line with a non-empty field
    /// beyond the declared column count aborts the load.
    ///
    /// On failure the store stays unloaded and its columns may be of
    /// mismatched partial length; discard it.
    pub fn load<R: Read>(&mut self, mut reader: R) -> MlResult<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let total_lines = text.lines().count();

        // No quoting and flexible record lengths: fields are plain
        // comma-separated tokens, exactly as the ingestion contract says.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        self.columns.clear();
        self.loaded = false;

        let mut records = rdr.records();
        let header = match records.next() {
            Some(rec) => rec.map_err(|e| MlError::Parse(e.to_string()))?,
            None => return Err(MlError::EmptySource),
        };
        let header_line = header.position().map_or(1, |p| p.line() as usize);
        let n = self.parse_header(&header);

        // The csv reader yields no record for a blank physical line, so
        // walk record positions and turn every skipped line into a row of
        // missing cells. `lines` stays the 1-based physical data-line
        // count, which RowOverflow reports.
        let mut lines = 0usize;
        for rec in records {
            let rec = rec.map_err(|e| MlError::Parse(e.to_string()))?;
            let rec_line = rec.position().map_or(header_line + lines + 1, |p| p.line() as usize);
            while header_line + lines + 1 < rec_line {
                self.push_missing_row();
                lines += 1;
            }
            lines += 1;
            self.push_record(&rec, n, lines)?;
        }
        while header_line + lines < total_lines {
            self.push_missing_row();
            lines += 1;
        }

        self.loaded = true;
        println!(
            "loaded: {} lines, {} columns, {} entries",
            lines,
            n,
            lines * n
        );
        Ok(())
    }

    /// Every header field becomes a column. A single trailing empty field
    /// (text after the final comma being empty) is not counted.
    fn parse_header(&mut self, record: &csv::StringRecord) -> usize {
        let mut fields: Vec<&str> = record.iter().collect();
        if fields.len() > 1 && fields.last() == Some(&"") {
            fields.pop();
        }
        for field in fields {
            self.columns.push(Column::new(field));
        }
        self.columns.len()
    }

    /// Appends one value to every column. Fields parse leniently: empty or
    /// non-numeric tokens become missing cells. Rows shorter than the
    /// header are padded with missing cells; a non-empty field past the
    /// header width fails the row.
    fn push_record(
        &mut self,
        record: &csv::StringRecord,
        expected: usize,
        line: usize,
    ) -> MlResult<()> {
        let mut cells = vec![None; expected];
        for (i, field) in record.iter().enumerate() {
            if i >= expected {
                if !field.is_empty() {
                    return Err(MlError::RowOverflow { line, expected });
                }
                continue;
            }
            cells[i] = field.trim().parse::<f64>().ok();
        }
        for (column, cell) in self.columns.iter_mut().zip(cells) {
            column.values.push(cell);
        }
        Ok(())
    }

    /// Appends a row of missing cells, the parse of a blank data line.
    fn push_missing_row(&mut self) {
        for column in &mut self.columns {
            column.values.push(None);
        }
    }

    /// True only after every data line parsed without overflow.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row count, taken from the first column (0 for an empty store).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Index of the first column whose header equals `name` exactly.
    /// Duplicate headers resolve to the earliest.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.header == name)
    }

    /// Display text for a cell: the decimal rendering of a present value,
    /// [`MISSING_CELL`] for a missing or out-of-range cell.
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        match self.columns.get(col).and_then(|c| c.get(row)) {
            Some(v) => format!("{}", v),
            None => MISSING_CELL.to_string(),
        }
    }
}

impl fmt::Display for ColumnStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.loaded {
            return writeln!(f, "dataset not loaded");
        }
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        writeln!(f, "{}", headers.join(","))?;
        for row in 0..self.row_count() {
            let cells: Vec<String> = (0..self.column_count())
                .map(|col| self.cell_text(row, col))
                .collect();
            writeln!(f, "{}", cells.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn store(text: &str) -> ColumnStore {
        ColumnStore::from_reader(Cursor::new(text.to_string())).unwrap()
    }

    #[test]
    fn empty_store() {
        let d = ColumnStore::new();
        assert_eq!(d.column_count(), 0);
        assert_eq!(d.row_count(), 0);
        assert!(!d.loaded());
    }

    #[test]
    fn counts_after_load() {
        let d = store("a,b,c\n1,2,3\n4,5,6\n");
        assert!(d.loaded());
        assert_eq!(d.column_count(), 3);
        assert_eq!(d.row_count(), 2);
        assert_eq!(d.columns()[1].header, "b");
    }

    #[test]
    fn empty_source_fails() {
        let err = ColumnStore::from_reader(Cursor::new(String::new())).unwrap_err();
        assert!(matches!(err, MlError::EmptySource));
    }

    #[test]
    fn missing_and_unparseable_cells() {
        let d = store("a,b,c\n4,,6\n1,hello,3\n");
        assert_eq!(d.row_count(), 2);
        assert_eq!(d.columns()[1].get(0), None);
        assert_eq!(d.columns()[1].get(1), None);
        assert_eq!(d.columns()[2].get(0), Some(6.0));
    }

    #[test]
    fn short_rows_are_padded() {
        let d = store("a,b,c\n1\n");
        assert_eq!(d.row_count(), 1);
        assert_eq!(d.columns()[0].get(0), Some(1.0));
        assert_eq!(d.columns()[1].get(0), None);
        assert_eq!(d.columns()[2].get(0), None);
    }

    #[test]
    fn row_overflow_aborts_load() {
        let err =
            ColumnStore::from_reader(Cursor::new("a,b\n1,2,3\n".to_string())).unwrap_err();
        assert!(matches!(
            err,
            MlError::RowOverflow {
                line: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn overflow_leaves_store_unloaded() {
        let mut d = ColumnStore::new();
        let err = d.load(Cursor::new("a,b\n1,2\n1,2,3\n".to_string()));
        assert!(err.is_err());
        assert!(!d.loaded());
    }

    #[test]
    fn blank_line_is_an_all_missing_row() {
        let d = store("a,b\n1,2\n\n3,4\n");
        assert_eq!(d.row_count(), 3);
        assert_eq!(d.columns()[0].get(0), Some(1.0));
        assert_eq!(d.columns()[0].get(1), None);
        assert_eq!(d.columns()[1].get(1), None);
        assert_eq!(d.columns()[1].get(2), Some(4.0));
    }

    #[test]
    fn trailing_blank_lines_become_rows() {
        let d = store("a,b\n1,2\n\n\n");
        assert_eq!(d.row_count(), 3);
        assert_eq!(d.cell_text(1, 0), MISSING_CELL);
        assert_eq!(d.cell_text(2, 1), MISSING_CELL);
    }

    #[test]
    fn overflow_reports_the_physical_data_line() {
        let err =
            ColumnStore::from_reader(Cursor::new("a,b\n\n1,2,3\n".to_string())).unwrap_err();
        assert!(matches!(
            err,
            MlError::RowOverflow {
                line: 2,
                expected: 2
            }
        ));
    }

    #[test]
    fn trailing_empty_fields_are_tolerated() {
        // Trailing comma: no extra header column, no row overflow.
        let d = store("a,b,\n1,2,\n");
        assert_eq!(d.column_count(), 2);
        assert_eq!(d.row_count(), 1);
    }

    #[test]
    fn cell_text_rendering() {
        let d = store("a,b,c\n1,2,3\n4,,6\n");
        assert_eq!(d.cell_text(0, 2), "3");
        assert_eq!(d.cell_text(1, 1), MISSING_CELL);
        assert_eq!(d.cell_text(9, 0), MISSING_CELL);
        assert_eq!(d.cell_text(0, 9), MISSING_CELL);
    }

    #[test]
    fn index_of_first_match() {
        let d = store("a,b,a\n1,2,3\n");
        assert_eq!(d.index_of("a"), Some(0));
        assert_eq!(d.index_of("b"), Some(1));
        assert_eq!(d.index_of("zz"), None);
    }

    #[test]
    fn from_path_rejects_non_csv() {
        let err = ColumnStore::from_path("weights.bin").unwrap_err();
        assert!(matches!(err, MlError::UnsupportedFormat(_)));
    }

    #[test]
    fn display_renders_grid() {
        let d = store("a,b\n1,\n");
        let text = format!("{}", d);
        assert_eq!(text, "a,b\n1,x\n");
        assert_eq!(format!("{}", ColumnStore::new()), "dataset not loaded\n");
    }
}
