//! d403 QHSE: журнал инцидентов (качество, охрана труда, экология)

mod fixtures;

use contracts::domain::a003_qhse_incident::QhseIncident;

use crate::shared::list::{FilterSpec, IdGenerator, PrefixedIds};
use crate::shared::schema::DashboardSchema;

pub use fixtures::sample_incidents;

pub struct QhseDashboard;

impl DashboardSchema for QhseDashboard {
    type Record = QhseIncident;

    fn key() -> &'static str {
        "d403_qhse"
    }

    fn title() -> &'static str {
        "QHSE incidents"
    }

    fn filter_spec() -> FilterSpec {
        FilterSpec {
            search_fields: &["title", "location", "reporter", "id"],
            category_field: Some("category"),
            date_field: Some("reported_on"),
        }
    }

    fn id_generator() -> Option<Box<dyn IdGenerator<String>>> {
        Some(Box::new(PrefixedIds::new("INC")))
    }

    fn sample_data() -> Vec<QhseIncident> {
        sample_incidents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use crate::shared::view_model::DashboardViewModel;
    use contracts::domain::a003_qhse_incident::{IncidentStatus, Severity};

    fn view_model() -> DashboardViewModel<QhseDashboard> {
        DashboardViewModel::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_new_incident_number_continues_the_log() {
        let mut vm = view_model();
        vm.open_add();
        for (field, value) in [
            ("reported_on", "2024-06-29"),
            ("title", "Chemical drum without label"),
            ("location", "Gresik warehouse"),
            ("severity", "Medium"),
            ("reporter", "Fajar Nugroho"),
            ("attachment_name", "drum.jpg"),
            ("attachment_url", "https://files.example.id/qhse/drum.jpg"),
        ] {
            vm.set_field(field, value).unwrap();
        }
        let saved = vm.submit().unwrap();
        assert_eq!(saved.id.as_deref(), Some("INC-000119"));
        assert_eq!(saved.attachment.file_name, "drum.jpg");
        assert_eq!(saved.status, IncidentStatus::Open);
    }

    #[test]
    fn test_combined_filters() {
        let mut vm = view_model();
        vm.set_search("cikarang");
        assert_eq!(vm.filtered().unwrap().len(), 4);

        vm.set_category(Some("Environment"));
        vm.set_date_range(Some("2024-06-01"), None);
        let hits = vm.filtered().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_deref(), Some("INC-000117"));
    }

    #[test]
    fn test_search_by_incident_number() {
        let mut vm = view_model();
        vm.set_search("inc-000114");
        let hits = vm.filtered().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].severity, Severity::Critical);
    }

    #[test]
    fn test_status_can_move_back_to_open() {
        let mut vm = view_model();
        let id = "INC-000115".to_string();
        vm.open_edit(&id).unwrap();
        vm.set_field("status", "Open").unwrap();
        vm.submit().unwrap();
        assert_eq!(vm.get(&id).unwrap().status, IncidentStatus::Open);
    }

    #[test]
    fn test_unknown_severity_stays_inline() {
        let mut vm = view_model();
        vm.open_add();
        assert!(vm.set_field("severity", "Catastrophic").is_err());
        assert!(vm.editor().field_error("severity").is_some());
    }
}
