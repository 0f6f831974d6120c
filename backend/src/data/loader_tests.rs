#[cfg(test)]
mod tests {
    use crate::data::checksum::calculate_checksum;
    use crate::data::error::DataError;
    use crate::data::loader::{load, load_from_str};
    use crate::models::Month;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Year,Month,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate,Recession";

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_csv() -> String {
        format!(
            "{}\n\
             1980,Jan,Supperminicar,1500.5,1200.0,5.4,1\n\
             1980,Feb,Mediumfamilycar,1800.0,1500.0,5.5,1\n\
             1981,Mar,Smallfamiliycar,2100.25,900.0,6.1,0\n",
            HEADER
        )
    }

    #[test]
    fn test_load_from_file() {
        let file = create_temp_csv(&sample_csv());
        let table = load(file.path()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.path(), Some(file.path()));

        let first = &table.records()[0];
        assert_eq!(first.year, 1980);
        assert_eq!(first.month, Month::Jan);
        assert_eq!(first.vehicle_type, "Supperminicar");
        assert_eq!(first.automobile_sales, 1500.5);
        assert_eq!(first.advertising_expenditure, 1200.0);
        assert_eq!(first.unemployment_rate, 5.4);
        assert!(first.recession);

        assert!(!table.records()[2].recession);
    }

    #[test]
    fn test_load_checksum_matches_file_bytes() {
        let content = sample_csv();
        let file = create_temp_csv(&content);
        let table = load(file.path()).unwrap();
        assert_eq!(table.checksum(), calculate_checksum(content.as_bytes()));
    }

    #[test]
    fn test_integer_columns_become_floats() {
        let csv = format!("{}\n1990,Jun,Sports,300,250,7,0\n", HEADER);
        let table = load_from_str(&csv).unwrap();

        let record = &table.records()[0];
        assert_eq!(record.automobile_sales, 300.0);
        assert_eq!(record.advertising_expenditure, 250.0);
        assert_eq!(record.unemployment_rate, 7.0);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "Date,Year,Month,Recession,Consumer_Confidence,Advertising_Expenditure,unemployment_rate,Automobile_Sales,Vehicle_Type,City\n\
                   1/31/1980,1980,Jan,1,108.24,1558,5.4,456,Supperminicar,Georgia\n\
                   2/29/1980,1980,Feb,1,98.75,3048,4.8,555.9,Supperminicar,New York\n";
        let table = load_from_str(csv).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].month, Month::Feb);
        assert_eq!(table.records()[1].automobile_sales, 555.9);
        assert_eq!(table.records()[0].advertising_expenditure, 1558.0);
    }

    #[test]
    fn test_missing_file() {
        let err = load("definitely/not/here/sales.csv").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("definitely/not/here/sales.csv"));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Year,Month,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,Recession\n\
                   1980,Jan,Sports,10,5,0\n";
        let err = load_from_str(csv).unwrap_err();

        match err {
            DataError::Parse { ref context, .. } => {
                assert_eq!(context.column.as_deref(), Some("unemployment_rate"));
                assert_eq!(context.operation.as_deref(), Some("check_columns"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_recession_flag() {
        let csv = format!("{}\n1980,Jan,Sports,10,5,4.0,2\n", HEADER);
        let err = load_from_str(&csv).unwrap_err();

        let context = err.context().expect("parse error carries context");
        assert_eq!(context.column.as_deref(), Some("Recession"));
        assert_eq!(context.row, Some(0));
    }

    #[test]
    fn test_fractional_recession_flag_is_rejected() {
        for flag in ["1.5", "0.7"] {
            let csv = format!(
                "{}\n1980,Jan,Sports,10,5,4.0,1\n1980,Feb,Sports,10,5,4.0,{}\n",
                HEADER, flag
            );
            let err = load_from_str(&csv).unwrap_err();

            let context = err.context().expect("parse error carries context");
            assert_eq!(context.column.as_deref(), Some("Recession"));
            assert_eq!(context.row, Some(1));
            assert_eq!(context.details.as_deref(), Some(flag));
        }
    }

    #[test]
    fn test_float_formatted_recession_flags() {
        let csv = format!(
            "{}\n1980,Jan,Sports,10,5,4.0,1.0\n1980,Feb,Sports,10,5,4.0,0.0\n",
            HEADER
        );
        let table = load_from_str(&csv).unwrap();

        assert!(table.records()[0].recession);
        assert!(!table.records()[1].recession);
    }

    #[test]
    fn test_late_decimal_after_whole_number_rows() {
        let mut csv = String::from(HEADER);
        for _ in 0..150 {
            csv.push_str("\n1980,Jan,Sports,100,10,5,0");
        }
        csv.push_str("\n1980,Feb,Sports,12.5,10.5,5.5,0\n");

        let table = load_from_str(&csv).unwrap();

        assert_eq!(table.len(), 151);
        let last = &table.records()[150];
        assert_eq!(last.automobile_sales, 12.5);
        assert_eq!(last.advertising_expenditure, 10.5);
        assert_eq!(last.unemployment_rate, 5.5);
        assert_eq!(table.records()[0].automobile_sales, 100.0);
    }

    #[test]
    fn test_unknown_month() {
        let csv = format!(
            "{}\n1980,Jan,Sports,10,5,4.0,0\n1980,Smarch,Sports,10,5,4.0,0\n",
            HEADER
        );
        let err = load_from_str(&csv).unwrap_err();

        let context = err.context().expect("parse error carries context");
        assert_eq!(context.column.as_deref(), Some("Month"));
        assert_eq!(context.row, Some(1));
    }

    #[test]
    fn test_missing_cell() {
        let csv = format!("{}\n1980,Jan,Sports,,5,4.0,0\n", HEADER);
        let err = load_from_str(&csv).unwrap_err();

        assert!(err.to_string().contains("Missing value"));
        let context = err.context().expect("parse error carries context");
        assert_eq!(context.column.as_deref(), Some("Automobile_Sales"));
    }
}
