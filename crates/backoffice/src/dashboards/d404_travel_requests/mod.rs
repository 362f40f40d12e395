//! d404 HR: заявки на командировки

mod fixtures;

use contracts::domain::a004_travel_request::TravelRequest;

use crate::shared::list::{FilterSpec, IdGenerator, PrefixedIds};
use crate::shared::schema::DashboardSchema;

pub use fixtures::sample_requests;

pub struct TravelRequestsDashboard;

impl DashboardSchema for TravelRequestsDashboard {
    type Record = TravelRequest;

    fn key() -> &'static str {
        "d404_travel_requests"
    }

    fn title() -> &'static str {
        "Travel requests"
    }

    fn filter_spec() -> FilterSpec {
        FilterSpec {
            search_fields: &["employee", "department", "destination", "purpose"],
            category_field: Some("status"),
            date_field: Some("departure_date"),
        }
    }

    fn id_generator() -> Option<Box<dyn IdGenerator<String>>> {
        Some(Box::new(PrefixedIds::new("TRV")))
    }

    fn sample_data() -> Vec<TravelRequest> {
        sample_requests()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use crate::shared::list::{FilterState, InsertPosition};
    use crate::shared::view_model::DashboardViewModel;
    use contracts::domain::a004_travel_request::ApprovalStatus;

    fn view_model() -> DashboardViewModel<TravelRequestsDashboard> {
        DashboardViewModel::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_sample_ids_follow_seed_order() {
        let vm = view_model();
        assert_eq!(vm.records()[0].id.as_deref(), Some("TRV-000001"));
        assert_eq!(vm.records()[10].id.as_deref(), Some("TRV-000011"));
        assert_eq!(vm.records()[0].employee, "Budi Santoso");
    }

    #[test]
    fn test_pending_in_july() {
        let mut vm = view_model();
        vm.set_filter(FilterState {
            category: Some("Pending".into()),
            date_from: Some("2024-07-01".into()),
            date_to: Some("2024-07-31".into()),
            ..FilterState::default()
        });
        let employees: Vec<String> = vm.filtered().unwrap().into_iter().map(|r| r.employee).collect();
        assert_eq!(employees, vec!["Budi Santoso", "Dewi Lestari", "Yuni Astuti", "Hendra Gunawan"]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let mut vm = view_model();
        vm.set_date_range(Some("2024-07-03"), Some("2024-07-03"));
        let hits = vm.filtered().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].destination, "Cikarang");
    }

    #[test]
    fn test_return_before_departure_is_rejected() {
        let mut vm = view_model();
        let id = "TRV-000002".to_string();
        vm.open_edit(&id).unwrap();
        vm.set_field("return_date", "2024-07-01").unwrap();
        assert!(vm.submit().is_err());
        assert_eq!(
            vm.editor().field_error("return_date"),
            Some("Return date cannot be before Departure date")
        );
        assert_eq!(vm.get(&id).unwrap().return_date, "2024-07-11");
    }

    #[test]
    fn test_approve_request() {
        let mut vm = view_model();
        let id = "TRV-000004".to_string();
        vm.open_edit(&id).unwrap();
        vm.set_field("status", "approved").unwrap();
        let saved = vm.submit().unwrap();
        assert_eq!(saved.status, ApprovalStatus::Approved);
        assert_eq!(vm.records()[3].status, ApprovalStatus::Approved);
    }

    #[test]
    fn test_append_position_from_config() {
        let mut config = Config::default();
        config.store.insert_position = InsertPosition::Back;
        let mut vm = DashboardViewModel::<TravelRequestsDashboard>::new(&config).unwrap();
        vm.open_add();
        for (field, value) in [
            ("employee", "Lina Marlina"),
            ("department", "Finance"),
            ("destination", "Pontianak"),
            ("purpose", "Tax audit"),
            ("departure_date", "2024-08-12"),
            ("return_date", "2024-08-14"),
            ("estimated_cost", "4100000"),
        ] {
            vm.set_field(field, value).unwrap();
        }
        vm.submit().unwrap();
        let last = vm.records().last().unwrap();
        assert_eq!(last.id.as_deref(), Some("TRV-000012"));
        assert_eq!(last.employee, "Lina Marlina");
    }
}
