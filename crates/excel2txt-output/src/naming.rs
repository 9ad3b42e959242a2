//! Output artifact naming.
//!
//! Both name components arrive here already normalized — the caller runs
//! the workbook base name and worksheet title through the normalizer
//! regardless of whether header normalization is on.

/// File extension for a delimiter: comma-delimited output is `.csv`,
/// everything else `.txt`.
pub fn extension_for(delimiter: &str) -> &'static str {
    if delimiter == "," { ".csv" } else { ".txt" }
}

/// Output file name for one worksheet: workbook base name and worksheet
/// title joined with a double underscore.
pub fn output_file_name(base: &str, sheet: &str, delimiter: &str) -> String {
    format!("{base}__{sheet}{}", extension_for(delimiter))
}

#[cfg(test)]
mod tests {
    use super::{extension_for, output_file_name};

    #[test]
    fn comma_delimiter_selects_csv() {
        assert_eq!(extension_for(","), ".csv");
    }

    #[test]
    fn any_other_delimiter_selects_txt() {
        assert_eq!(extension_for("\t"), ".txt");
        assert_eq!(extension_for("|"), ".txt");
        assert_eq!(extension_for(";"), ".txt");
    }

    #[test]
    fn name_components_join_with_double_underscore() {
        assert_eq!(output_file_name("test1", "sheet1", "\t"), "test1__sheet1.txt");
        assert_eq!(output_file_name("test_2", "sheet1", ","), "test_2__sheet1.csv");
    }
}
