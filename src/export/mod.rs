use crate::model::Patient;
use crate::view;

pub mod pdf;
pub mod xlsx;

/// 两种导出共用的表头，列序固定
pub const HEADERS: [&str; 5] = ["Sl. No.", "Name", "Age", "Disease", "Registered At"];

/// 两种导出共用的行投影
/// The shared row projection both generators consume
pub struct ReportRow {
    pub serial: usize,
    pub name: String,
    pub age: u32,
    pub disease: String,
    pub registered_at: String,
}

/// 把一位医生的病人序列投影成报表行，保持输入顺序
pub fn report_rows(patients: &[Patient]) -> Vec<ReportRow> {
    patients
        .iter()
        .enumerate()
        .map(|(i, p)| ReportRow {
            serial: i + 1,
            name: p.name.clone(),
            age: p.age,
            disease: p.disease.clone(),
            registered_at: view::format_timestamp(p.created_at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;
    use chrono::{TimeZone, Utc};

    pub(super) fn sample_patients() -> Vec<Patient> {
        [("Ann", 30_u32, "Flu"), ("Bo", 45, "Cold")]
            .into_iter()
            .map(|(name, age, disease)| Patient {
                id: Some(ObjectId::new()),
                name: name.to_owned(),
                age,
                disease: disease.to_owned(),
                doctor_id: ObjectId::new(),
                created_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap(),
            })
            .collect()
    }

    #[test]
    fn rows_keep_input_order_and_serials() {
        let rows = report_rows(&sample_patients());
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].serial, rows[0].name.as_str()), (1, "Ann"));
        assert_eq!((rows[1].serial, rows[1].name.as_str()), (2, "Bo"));
    }

    #[test]
    fn headers_match_the_dashboard_table() {
        assert_eq!(HEADERS, ["Sl. No.", "Name", "Age", "Disease", "Registered At"]);
    }
}
