// ==========================================
// File parsers
// ==========================================
// Excel (.xlsx/.xls) and CSV (.csv) both land in a RawGrid, a
// positional cell grid. Fields are addressed by column position
// downstream, so parsers must keep row and column indexes
// aligned with the sheet: blank rows are NOT dropped here, only
// after the data-start slice.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawGrid - positional cell grid
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RawGrid {
    /// Trimmed cell text, row by row. Leading empty columns are
    /// padded so indexes match sheet letters.
    pub rows: Vec<Vec<String>>,
    /// 0-based sheet row of rows[0] (Excel ranges can start below
    /// row 1; CSV always starts at 0).
    pub first_row: usize,
}

impl RawGrid {
    /// Rows at or below the configured data start, with their
    /// absolute 0-based sheet row.
    pub fn data_rows<'a>(
        &'a self,
        data_start_row: usize,
    ) -> impl Iterator<Item = (usize, &'a [String])> + 'a {
        let first_row = self.first_row;
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, cells)| (first_row + i, cells.as_slice()))
            .filter(move |(abs, _)| *abs >= data_start_row)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Returns the cell at `idx`, or "" for short rows.
pub fn cell(cells: &[String], idx: usize) -> &str {
    cells.get(idx).map(String::as_str).unwrap_or("")
}

pub fn is_blank_row(cells: &[String]) -> bool {
    cells.iter().all(|c| c.is_empty())
}

// ==========================================
// FileParser trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// Parse a file into a positional grid. `sheet` selects the
    /// worksheet for Excel sources and is ignored for CSV.
    fn parse_grid(&self, file_path: &Path, sheet: Option<&str>) -> ImportResult<RawGrid>;
}

// ==========================================
// CSV parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_grid(&self, file_path: &Path, _sheet: Option<&str>) -> ImportResult<RawGrid> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // positional layout, header rows are data-start padding
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|v| v.trim().to_string()).collect());
        }

        Ok(RawGrid { rows, first_row: 0 })
    }
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_grid(&self, file_path: &Path, sheet: Option<&str>) -> ImportResult<RawGrid> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "arquivo Excel sem abas".to_string(),
            ));
        }

        let sheet_name = match sheet {
            Some(name) => {
                if !sheet_names.iter().any(|s| s == name) {
                    return Err(ImportError::SheetNotFound {
                        sheet: name.to_string(),
                        available: sheet_names.join(", "),
                    });
                }
                name.to_string()
            }
            None => sheet_names[0].clone(),
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // The used range can start anywhere; pad so cell indexes
        // still line up with sheet column letters.
        let (first_row, col_pad) = match range.start() {
            Some((row, col)) => (row as usize, col as usize),
            None => return Ok(RawGrid::default()),
        };

        let mut rows = Vec::new();
        for data_row in range.rows() {
            let mut cells = vec![String::new(); col_pad];
            cells.extend(data_row.iter().map(|c| c.to_string().trim().to_string()));
            rows.push(cells);
        }

        Ok(RawGrid { rows, first_row })
    }
}

// ==========================================
// Extension-dispatched parser
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P, sheet: Option<&str>) -> ImportResult<RawGrid> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_grid(path, sheet),
            "xlsx" | "xls" => ExcelParser.parse_grid(path, sheet),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn named_csv(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_csv_parser_keeps_row_positions() {
        let file = named_csv("a,b\n,\nc,d\n");
        let grid = CsvParser.parse_grid(file.path(), None).unwrap();

        // blank row stays, indexes stay aligned
        assert_eq!(grid.rows.len(), 3);
        assert!(is_blank_row(&grid.rows[1]));
        assert_eq!(cell(&grid.rows[2], 1), "d");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_grid(Path::new("nao_existe.csv"), None);
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_data_rows_slices_by_absolute_row() {
        let file = named_csv("cab1,cab2\nx,y\nSKU1,10\nSKU2,20\n");
        let grid = CsvParser.parse_grid(file.path(), None).unwrap();

        let data: Vec<_> = grid.data_rows(2).collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].0, 2);
        assert_eq!(cell(data[0].1, 0), "SKU1");
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser.parse(Path::new("dados.txt"), None);
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_cell_out_of_bounds_is_empty() {
        let row = vec!["a".to_string()];
        assert_eq!(cell(&row, 5), "");
    }
}
