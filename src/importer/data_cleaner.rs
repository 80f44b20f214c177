// ==========================================
// Data cleaner
// ==========================================
// Cell-level normalization. Source reports mix pt-BR formatted
// strings ("1.234,56") with plain spreadsheet numerics
// ("1234.56"); both must parse to the same value.
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    /// Empty or whitespace-only cells become None.
    pub fn normalize_null(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Decimal normalization: when a comma is present it is the
    /// decimal separator and dots are thousands ("1.234,56");
    /// otherwise a dot is a plain decimal point ("1234.56", the
    /// form numeric spreadsheet cells stringify to).
    fn normalize_decimal(raw: &str) -> String {
        let compact: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
            .collect();
        if compact.contains(',') {
            compact.replace('.', "").replace(',', ".")
        } else {
            compact
        }
    }

    /// Parse a quantity cell. Fractions truncate toward zero, the
    /// way the source macro coerced them. None means garbled.
    pub fn parse_int(raw: &str) -> Option<i64> {
        Self::parse_float(raw).map(|f| f.trunc() as i64)
    }

    /// Parse a decimal cell. None means garbled.
    pub fn parse_float(raw: &str) -> Option<f64> {
        Self::normalize_decimal(raw).parse::<f64>().ok()
    }
}
