use serde::Deserialize;

/// Result code for "processed normally".
pub const CODE_OK: &str = "INFO-000";
/// Result code for "no data for this query" — a clean miss.
pub const CODE_NO_DATA: &str = "INFO-200";

/// One barcode-link row: the report number the barcode maps to, plus the
/// basic product metadata the dataset carries.
#[derive(Debug, Clone, Deserialize)]
pub struct BarcodeRow {
    #[serde(rename = "PRDLST_REPORT_NO", default)]
    pub report_no: Option<String>,
    #[serde(rename = "PRDLST_NM", default)]
    pub product_name: Option<String>,
    #[serde(rename = "BSSH_NM", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "PRDLST_DCNM", default)]
    pub product_type: Option<String>,
    #[serde(rename = "PRMS_DT", default)]
    pub report_date: Option<String>,
    #[serde(rename = "SITE_ADDR", default)]
    pub address: Option<String>,
}

/// Response envelope: `{"C005": {"total_count": ..., "row": [...],
/// "RESULT": {"CODE", "MSG"}}}`. Some error responses drop the dataset
/// object and put `RESULT` at the top level instead.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "C005", default)]
    pub c005: Option<Dataset>,
    #[serde(rename = "RESULT", default)]
    pub result: Option<ResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub row: Option<Vec<BarcodeRow>>,
    #[serde(rename = "RESULT", default)]
    pub result: Option<ResultInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultInfo {
    #[serde(rename = "CODE", default)]
    pub code: Option<String>,
    #[serde(rename = "MSG", default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_normal_row() {
        let json = r#"{
            "C005": {
                "total_count": "1",
                "row": [{
                    "PRDLST_REPORT_NO": "12345",
                    "PRDLST_NM": "Test Snack",
                    "BSSH_NM": "테스트식품",
                    "PRDLST_DCNM": "과자",
                    "PRMS_DT": "20210401",
                    "SITE_ADDR": "서울"
                }],
                "RESULT": {"CODE": "INFO-000", "MSG": "정상처리되었습니다."}
            }
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let dataset = envelope.c005.unwrap();
        assert_eq!(dataset.result.unwrap().code.as_deref(), Some(CODE_OK));

        let rows = dataset.row.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].report_no.as_deref(), Some("12345"));
        assert_eq!(rows[0].product_name.as_deref(), Some("Test Snack"));
        assert_eq!(rows[0].manufacturer.as_deref(), Some("테스트식품"));
    }

    #[test]
    fn parses_no_data_code() {
        let json = r#"{
            "C005": {"total_count": "0", "RESULT": {"CODE": "INFO-200", "MSG": "해당하는 데이터가 없습니다."}}
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let dataset = envelope.c005.unwrap();
        assert_eq!(dataset.result.unwrap().code.as_deref(), Some(CODE_NO_DATA));
        assert!(dataset.row.is_none());
    }

    #[test]
    fn parses_top_level_error_result() {
        let json = r#"{"RESULT": {"CODE": "ERROR-300", "MSG": "필수 값이 누락되어 있습니다."}}"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(envelope.c005.is_none());
        assert_eq!(envelope.result.unwrap().code.as_deref(), Some("ERROR-300"));
    }
}
